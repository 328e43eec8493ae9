//! CLI-specific error types
//!
//! Every CLI failure aborts the invocation before any write occurs.

use thiserror::Error;

use crate::record::RecordError;
use crate::version::VersionError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Stored or supplied version string is malformed
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Record could not be loaded or saved
    #[error(transparent)]
    Record(#[from] RecordError),
}
