//! Version error types

use thiserror::Error;

/// Result type for version operations
pub type VersionResult<T> = Result<T, VersionError>;

/// Version string errors
#[derive(Debug, Clone, Error)]
pub enum VersionError {
    /// Input does not match the version grammar
    #[error("Invalid version format: {0}. Expected semver like 1.0.0 or 1.0.0-A")]
    InvalidFormat(String),
}

impl VersionError {
    /// Invalid format error for the given input
    pub fn invalid_format(text: impl Into<String>) -> Self {
        Self::InvalidFormat(text.into())
    }
}
