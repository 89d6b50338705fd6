//! Comparison modes for versions with an unknown patch component

use std::fmt;

/// Patch number assumed for a version without one when comparing leniently.
///
/// Must stay above any patch release PHP will realistically ship.
pub const LENIENT_PATCH_SENTINEL: u32 = 999;

/// Policy for resolving a missing patch component before two versions are compared.
///
/// Installed versions are often only known as `major.minor` (e.g. `8.1` for
/// whatever patch is currently linked), so the caller has to decide what that
/// unknown patch stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonMode {
    /// A missing patch is the earliest release of the minor line (`.0`)
    Strict,
    /// A missing patch is the latest, still-unknown release of the minor line
    Lenient,
}

impl ComparisonMode {
    /// Resolve an optional patch to a concrete value under this mode.
    ///
    /// This is the only place where a missing patch is given a value.
    pub fn resolve_patch(self, patch: Option<u32>) -> u32 {
        match (patch, self) {
            (Some(patch), _) => patch,
            (None, ComparisonMode::Strict) => 0,
            (None, ComparisonMode::Lenient) => LENIENT_PATCH_SENTINEL,
        }
    }

    /// Get the name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Strict => "strict",
            ComparisonMode::Lenient => "lenient",
        }
    }
}

impl From<bool> for ComparisonMode {
    fn from(strict: bool) -> Self {
        if strict {
            ComparisonMode::Strict
        } else {
            ComparisonMode::Lenient
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
