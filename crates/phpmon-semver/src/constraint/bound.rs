//! Bound type for constraint boundaries

use std::fmt;

/// A fully concrete `(major, minor, patch)` triple.
///
/// Produced by resolving a [`crate::VersionNumber`] under a comparison mode.
/// Components are wider than the parsed ones so computing the next minor or
/// major line never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl ResolvedVersion {
    /// Create a new resolved version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        ResolvedVersion {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
        }
    }

    /// Get the major version
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Get the minor version
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Get the patch version
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// First release of the next major line, e.g. `8.0.0` for `7.4.3`
    pub fn next_major(&self) -> Self {
        ResolvedVersion {
            major: self.major + 1,
            minor: 0,
            patch: 0,
        }
    }

    /// First release of the next minor line, e.g. `7.5.0` for `7.4.3`
    pub fn next_minor(&self) -> Self {
        ResolvedVersion {
            major: self.major,
            minor: self.minor + 1,
            patch: 0,
        }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Represents a bound (lower or upper) of a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    version: ResolvedVersion,
    is_inclusive: bool,
}

impl Bound {
    /// Create a new bound
    pub fn new(version: ResolvedVersion, is_inclusive: bool) -> Self {
        Bound {
            version,
            is_inclusive,
        }
    }

    /// Create a bound that admits `version` itself
    pub fn inclusive(version: ResolvedVersion) -> Self {
        Bound::new(version, true)
    }

    /// Create a bound that stops short of `version`
    pub fn exclusive(version: ResolvedVersion) -> Self {
        Bound::new(version, false)
    }

    /// Get the version
    pub fn version(&self) -> ResolvedVersion {
        self.version
    }

    /// Check if the bound is inclusive
    pub fn is_inclusive(&self) -> bool {
        self.is_inclusive
    }

    /// Whether `candidate` lies on or above this bound when used as a lower bound
    pub fn admits_above(&self, candidate: &ResolvedVersion) -> bool {
        if self.is_inclusive {
            *candidate >= self.version
        } else {
            *candidate > self.version
        }
    }

    /// Whether `candidate` lies on or below this bound when used as an upper bound
    pub fn admits_below(&self, candidate: &ResolvedVersion) -> bool {
        if self.is_inclusive {
            *candidate <= self.version
        } else {
            *candidate < self.version
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.version,
            if self.is_inclusive {
                "inclusive"
            } else {
                "exclusive"
            }
        )
    }
}
