//! verbump - deterministic version bumps over a persisted JSON record
//!
//! The core is a small state machine: parse the stored version, apply
//! one of five transitions, re-serialize, stamp with a UTC timestamp,
//! write the record back.

pub mod build_info;
pub mod cli;
pub mod clock;
pub mod record;
pub mod version;
