//! Single version constraint implementation

use std::fmt;
use std::str::FromStr;

use super::{Bound, ConstraintOperator, ResolvedVersion};
use crate::error::{Result, VersionError};
use crate::{ComparisonMode, VersionNumber};

/// A single PHP version constraint (e.g. `^8.1`, `~7.4.3`, `>=8.0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionConstraint {
    operator: ConstraintOperator,
    bound: VersionNumber,
}

impl VersionConstraint {
    /// Create a new constraint
    pub fn new(operator: ConstraintOperator, bound: VersionNumber) -> Self {
        VersionConstraint { operator, bound }
    }

    /// Parse an operator-prefixed constraint string.
    ///
    /// The operator has to be immediately followed by the version; anything that
    /// is left after stripping the prefix must be a valid version number.
    pub fn parse(raw: &str) -> Result<Self> {
        let (operator, version) = ConstraintOperator::split_prefix(raw);
        let bound = VersionNumber::parse(version)
            .map_err(|_| VersionError::InvalidConstraintString(raw.to_string()))?;

        Ok(VersionConstraint::new(operator, bound))
    }

    /// Get the operator
    pub fn operator(&self) -> ConstraintOperator {
        self.operator
    }

    /// The version number named by the constraint
    pub fn bound(&self) -> VersionNumber {
        self.bound
    }

    /// Lowest version admitted by this constraint under `mode`.
    ///
    /// Candidates are compared against it as given by [`VersionConstraint::resolve_candidate`].
    pub fn lower_bound(&self, mode: ComparisonMode) -> Bound {
        match self.operator {
            // `8.1` pins the minor line only, starting at its first release
            ConstraintOperator::Exact if !self.bound.has_patch() => {
                Bound::inclusive(ResolvedVersion::new(self.bound.major(), self.bound.minor(), 0))
            }
            ConstraintOperator::GreaterThan => Bound::exclusive(self.bound.resolved(mode)),
            ConstraintOperator::Exact
            | ConstraintOperator::GreaterOrEqual
            | ConstraintOperator::Caret
            | ConstraintOperator::Tilde => Bound::inclusive(self.bound.resolved(mode)),
        }
    }

    /// Highest version admitted by this constraint under `mode`, if there is one.
    ///
    /// Candidates are compared against it as given by [`VersionConstraint::resolve_candidate`].
    pub fn upper_bound(&self, mode: ComparisonMode) -> Option<Bound> {
        let resolved = self.bound.resolved(mode);

        match self.operator {
            ConstraintOperator::Exact if !self.bound.has_patch() => Some(Bound::exclusive(resolved.next_minor())),
            ConstraintOperator::Exact => Some(Bound::inclusive(resolved)),
            ConstraintOperator::Caret => Some(Bound::exclusive(resolved.next_major())),
            // The precision of the constraint decides which component may roll forward
            ConstraintOperator::Tilde if self.bound.has_patch() => Some(Bound::exclusive(resolved.next_minor())),
            ConstraintOperator::Tilde => Some(Bound::exclusive(resolved.next_major())),
            ConstraintOperator::GreaterOrEqual | ConstraintOperator::GreaterThan => None,
        }
    }

    /// The concrete triple `candidate` is checked against the bounds as.
    ///
    /// This is `candidate.resolved(mode)`, except that a lenient candidate with an
    /// unknown patch may well be the release an exact constraint pins, so it takes
    /// over the pinned patch.
    pub fn resolve_candidate(&self, candidate: &VersionNumber, mode: ComparisonMode) -> ResolvedVersion {
        match (self.operator, candidate.patch(), self.bound.patch(), mode) {
            (ConstraintOperator::Exact, None, Some(pinned), ComparisonMode::Lenient) => {
                ResolvedVersion::new(candidate.major(), candidate.minor(), pinned)
            }
            _ => candidate.resolved(mode),
        }
    }

    /// Check whether `candidate` satisfies this constraint.
    ///
    /// With `strict` a missing patch counts as `.0`, otherwise as the latest
    /// release of its minor line.
    pub fn matches(&self, candidate: &VersionNumber, strict: bool) -> bool {
        self.matches_with(candidate, ComparisonMode::from(strict))
    }

    /// Same as [`VersionConstraint::matches`] with a named comparison mode
    pub fn matches_with(&self, candidate: &VersionNumber, mode: ComparisonMode) -> bool {
        let resolved = self.resolve_candidate(candidate, mode);

        self.lower_bound(mode).admits_above(&resolved)
            && self
                .upper_bound(mode)
                .map_or(true, |upper| upper.admits_below(&resolved))
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.bound)
    }
}

impl FromStr for VersionConstraint {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        VersionConstraint::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionConstraint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionConstraint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        VersionConstraint::parse(&s).map_err(serde::de::Error::custom)
    }
}
