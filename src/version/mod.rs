//! Version codec and transitions
//!
//! Provides:
//! - `ParsedVersion`: structured form of a version string
//! - `Bump`: the five deterministic version transitions

mod bump;
mod errors;
mod parse;

pub use bump::Bump;
pub use errors::{VersionError, VersionResult};
pub use parse::ParsedVersion;
