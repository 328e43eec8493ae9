//! Record store error types

use std::io;

use thiserror::Error;

/// Result type for record store operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors loading or saving the persisted record
#[derive(Debug, Error)]
pub enum RecordError {
    /// Backing document does not exist
    #[error("Version record not found: {0}")]
    NotFound(String),

    /// Backing document is not a valid record
    #[error("Failed to parse version record: {0}")]
    Parse(String),

    /// Record could not be serialized
    #[error("Failed to serialize version record: {0}")]
    Serialize(String),

    /// Underlying filesystem failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl RecordError {
    /// I/O error for the given path
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
