//! CLI module for verbump
//!
//! Provides command-line interface for:
//! - patch/minor/major: numeric version bumps
//! - test: add or advance the test identifier
//! - release: strip the test identifier
//! - show: print the current version and timestamp without writing

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{apply_bump, run, run_command};
pub use errors::{CliError, CliResult};
