use thiserror::Error;

/// Errors produced while parsing version and constraint strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersionString(String),

    #[error("Invalid version constraint \"{0}\"")]
    InvalidConstraintString(String),
}

pub type Result<T> = std::result::Result<T, VersionError>;
