//! PHP version numbers and constraint matching
//!
//! This crate parses `major.minor[.patch]` version strings and evaluates installed
//! PHP versions against Composer-style constraints (`8.1`, `^8.1`, `~7.4.3`, `>=8.0`,
//! `>8.0`). Because installed versions are often only known as `major.minor`, every
//! evaluation takes a comparison mode deciding what a missing patch stands for.

mod collection;
mod comparison;
pub mod constraint;
mod error;
mod version_number;

pub use collection::VersionCollection;
pub use comparison::{ComparisonMode, LENIENT_PATCH_SENTINEL};
pub use constraint::{Bound, ConstraintOperator, ResolvedVersion, VersionConstraint};
pub use error::{Result, VersionError};
pub use version_number::VersionNumber;
