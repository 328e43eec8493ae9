//! Persisted record structure
//!
//! Format:
//! ```json
//! {
//!     "version": "1.0.0-A",
//!     "timestamp": "2026-08-30T11:30:00.000Z",
//!     "...": "any other fields, preserved verbatim"
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persisted document holding the current version and its timestamp.
///
/// Fields this tool does not own are captured in `extra` and survive a
/// load -> mutate -> save cycle unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionRecord {
    /// Canonical version string, e.g. `1.0.0` or `1.0.0-A`
    pub version: String,

    /// ISO-8601 UTC timestamp of the last mutation
    pub timestamp: String,

    /// Opaque passthrough fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
