//! Version number parsing

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::ResolvedVersion;
use crate::error::{Result, VersionError};
use crate::ComparisonMode;

lazy_static! {
    // `[0-9]` rather than `\d`, which also accepts non-ASCII digits
    static ref VERSION_RE: Regex = Regex::new(r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+))?$").unwrap();
}

/// A PHP version number such as `8.1` or `8.1.2`.
///
/// The patch component is optional: installed versions are frequently only known
/// at `major.minor` granularity. The derived ordering is structural (a missing
/// patch sorts before any patch); constraint evaluation uses [`VersionNumber::compare`]
/// which resolves the missing patch through a [`ComparisonMode`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber {
    major: u32,
    minor: u32,
    patch: Option<u32>,
}

impl VersionNumber {
    /// Create a new version number
    pub fn new(major: u32, minor: u32, patch: Option<u32>) -> Self {
        VersionNumber {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `major.minor[.patch]` string.
    ///
    /// Only unsigned ASCII decimal segments are accepted; signs, whitespace,
    /// a single segment or more than three segments are all invalid.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || VersionError::InvalidVersionString(raw.to_string());

        let captures = VERSION_RE.captures(raw).ok_or_else(invalid)?;
        let segment = |index: usize| -> Result<Option<u32>> {
            captures
                .get(index)
                .map(|m| m.as_str().parse::<u32>().map_err(|_| invalid()))
                .transpose()
        };

        let major = segment(1)?.ok_or_else(invalid)?;
        let minor = segment(2)?.ok_or_else(invalid)?;
        let patch = segment(3)?;

        Ok(VersionNumber::new(major, minor, patch))
    }

    /// Get the major version
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Get the minor version
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Get the patch version, if one was given
    pub fn patch(&self) -> Option<u32> {
        self.patch
    }

    /// Check if a patch version was given
    pub fn has_patch(&self) -> bool {
        self.patch.is_some()
    }

    /// The `major.minor` form, e.g. `8.1` for `8.1.2`
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Check if both versions share the major version
    pub fn is_same_major(&self, other: &VersionNumber) -> bool {
        self.major == other.major
    }

    /// Same major and minor, regardless of patch
    pub fn is_same_minor(&self, other: &VersionNumber) -> bool {
        self.major == other.major && self.minor == other.minor
    }

    /// The concrete triple this version stands for under `mode`
    pub fn resolved(&self, mode: ComparisonMode) -> ResolvedVersion {
        ResolvedVersion::new(self.major, self.minor, mode.resolve_patch(self.patch))
    }

    /// Compare two versions after resolving missing patches under `mode`
    pub fn compare(&self, other: &VersionNumber, mode: ComparisonMode) -> Ordering {
        self.resolved(mode).cmp(&other.resolved(mode))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for VersionNumber {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        VersionNumber::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        VersionNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}
