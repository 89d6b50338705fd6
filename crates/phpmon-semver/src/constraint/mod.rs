//! Constraint types for version matching

mod bound;
mod constraint;
mod operator;

pub use bound::{Bound, ResolvedVersion};
pub use constraint::VersionConstraint;
pub use operator::ConstraintOperator;
