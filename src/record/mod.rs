//! Persisted version record and its store
//!
//! The record is a single JSON document owning the current version and
//! its timestamp; everything else in the document is opaque passthrough.

mod errors;
mod record;
mod store;

pub use errors::{RecordError, RecordResult};
pub use record::VersionRecord;
pub use store::{JsonFileStore, RecordStore};
