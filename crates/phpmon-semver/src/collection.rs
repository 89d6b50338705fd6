//! Collection of installed versions that can be filtered by constraint

use crate::{ComparisonMode, VersionConstraint, VersionNumber};

/// An ordered set of PHP versions, typically the ones installed on the system.
///
/// Built from raw strings coming from external listings, so malformed entries are
/// dropped rather than failing the whole collection. Members keep the order they
/// were supplied in and queries never modify them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCollection {
    versions: Vec<VersionNumber>,
}

impl VersionCollection {
    /// Create a collection from already parsed versions
    pub fn new(versions: Vec<VersionNumber>) -> Self {
        VersionCollection { versions }
    }

    /// Parse every raw string, silently skipping the ones that are not versions
    pub fn make<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let versions = raw
            .into_iter()
            .filter_map(|raw| match VersionNumber::parse(raw.as_ref()) {
                Ok(version) => Some(version),
                Err(err) => {
                    log::debug!("Skipping installed version: {}", err);
                    None
                }
            })
            .collect();

        VersionCollection { versions }
    }

    /// Get all versions, in their original order
    pub fn all(&self) -> &[VersionNumber] {
        &self.versions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionNumber> {
        self.versions.iter()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Check if the exact version is a member
    pub fn contains(&self, version: &VersionNumber) -> bool {
        self.versions.contains(version)
    }

    /// Return the members satisfying `constraint`, in their original order.
    ///
    /// An unparsable constraint matches nothing. There is no default for
    /// `strict`; see [`VersionConstraint::matches`].
    pub fn matching(&self, constraint: &str, strict: bool) -> Vec<VersionNumber> {
        match VersionConstraint::parse(constraint) {
            Ok(constraint) => self.matching_constraint(&constraint, strict),
            Err(err) => {
                log::debug!("No versions match: {}", err);
                Vec::new()
            }
        }
    }

    /// Same as [`VersionCollection::matching`] for an already parsed constraint
    pub fn matching_constraint(&self, constraint: &VersionConstraint, strict: bool) -> Vec<VersionNumber> {
        let mode = ComparisonMode::from(strict);
        let matches: Vec<VersionNumber> = self
            .versions
            .iter()
            .filter(|version| constraint.matches_with(version, mode))
            .copied()
            .collect();

        log::trace!(
            "{} of {} versions match {} ({})",
            matches.len(),
            self.versions.len(),
            constraint,
            mode
        );

        matches
    }
}

impl FromIterator<VersionNumber> for VersionCollection {
    fn from_iter<T: IntoIterator<Item = VersionNumber>>(iter: T) -> Self {
        VersionCollection::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VersionCollection {
    type Item = &'a VersionNumber;
    type IntoIter = std::slice::Iter<'a, VersionNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}
