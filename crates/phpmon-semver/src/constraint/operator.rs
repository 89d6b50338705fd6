//! Operator types for version constraints

use std::fmt;

/// Operators a constraint string can start with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOperator {
    /// No prefix
    Exact,
    /// Caret (^), locks the major version
    Caret,
    /// Tilde (~), locks major or major.minor depending on precision
    Tilde,
    /// Greater than or equal (>=)
    GreaterOrEqual,
    /// Greater than (>)
    GreaterThan,
}

/// Prefixes in match order; `>=` has to be tried before `>`.
const PREFIXES: [(&str, ConstraintOperator); 4] = [
    (">=", ConstraintOperator::GreaterOrEqual),
    (">", ConstraintOperator::GreaterThan),
    ("^", ConstraintOperator::Caret),
    ("~", ConstraintOperator::Tilde),
];

impl ConstraintOperator {
    /// Split a constraint string into its operator and the remaining version text
    pub fn split_prefix(raw: &str) -> (Self, &str) {
        PREFIXES
            .iter()
            .find_map(|(prefix, operator)| raw.strip_prefix(prefix).map(|rest| (*operator, rest)))
            .unwrap_or((ConstraintOperator::Exact, raw))
    }

    /// Get the prefix this operator is written with
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintOperator::Exact => "",
            ConstraintOperator::Caret => "^",
            ConstraintOperator::Tilde => "~",
            ConstraintOperator::GreaterOrEqual => ">=",
            ConstraintOperator::GreaterThan => ">",
        }
    }

    /// Get all supported prefixes, in match order
    pub fn supported_prefixes() -> impl Iterator<Item = &'static str> {
        PREFIXES.iter().map(|(prefix, _)| *prefix)
    }
}

impl fmt::Display for ConstraintOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix() {
        assert_eq!(ConstraintOperator::split_prefix(">=7.2"), (ConstraintOperator::GreaterOrEqual, "7.2"));
        assert_eq!(ConstraintOperator::split_prefix(">7.2"), (ConstraintOperator::GreaterThan, "7.2"));
        assert_eq!(ConstraintOperator::split_prefix("^7.2"), (ConstraintOperator::Caret, "7.2"));
        assert_eq!(ConstraintOperator::split_prefix("~7.2"), (ConstraintOperator::Tilde, "7.2"));
        assert_eq!(ConstraintOperator::split_prefix("7.2"), (ConstraintOperator::Exact, "7.2"));
    }

    #[test]
    fn test_split_prefix_only_strips_once() {
        assert_eq!(ConstraintOperator::split_prefix(">>7.2"), (ConstraintOperator::GreaterThan, ">7.2"));
        assert_eq!(ConstraintOperator::split_prefix("^~7.2"), (ConstraintOperator::Caret, "~7.2"));
        assert_eq!(ConstraintOperator::split_prefix("=7.2"), (ConstraintOperator::Exact, "=7.2"));
        assert_eq!(ConstraintOperator::split_prefix(""), (ConstraintOperator::Exact, ""));
    }

    #[test]
    fn test_as_str_matches_supported_prefixes() {
        for prefix in ConstraintOperator::supported_prefixes() {
            let (operator, rest) = ConstraintOperator::split_prefix(prefix);
            assert_eq!(operator.as_str(), prefix);
            assert!(rest.is_empty());
        }
        assert_eq!(
            ConstraintOperator::supported_prefixes().collect::<Vec<_>>(),
            vec![">=", ">", "^", "~"]
        );
    }
}
