//! Build-time version constants
//!
//! `build.rs` reads the `version.json` record next to the manifest and
//! embeds its version and timestamp at compile time. Builds without a
//! record fall back to the crate version and an empty timestamp.

/// Version recorded at build time
pub const VERSION: &str = env!("VERBUMP_VERSION");

/// Timestamp recorded at build time
pub const TIMESTAMP: &str = env!("VERBUMP_TIMESTAMP");
