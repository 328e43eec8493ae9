//! CLI argument definitions using clap
//!
//! Commands:
//! - verbump patch --file <path>
//! - verbump minor --file <path>
//! - verbump major --file <path>
//! - verbump test --file <path>
//! - verbump release --file <path>
//! - verbump show --file <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// verbump - deterministic version bumps over a persisted JSON record
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bump the patch version (1.0.0 -> 1.0.1)
    Patch {
        /// Path to the version record
        #[arg(long, default_value = "./version.json")]
        file: PathBuf,
    },

    /// Bump the minor version (1.0.0 -> 1.1.0)
    Minor {
        /// Path to the version record
        #[arg(long, default_value = "./version.json")]
        file: PathBuf,
    },

    /// Bump the major version (1.0.0 -> 2.0.0)
    Major {
        /// Path to the version record
        #[arg(long, default_value = "./version.json")]
        file: PathBuf,
    },

    /// Add or advance the test identifier (1.0.0 -> 1.0.0-A, 1.0.0-A -> 1.0.0-B)
    Test {
        /// Path to the version record
        #[arg(long, default_value = "./version.json")]
        file: PathBuf,
    },

    /// Strip the test identifier and bump patch (1.0.0-C -> 1.0.1)
    Release {
        /// Path to the version record
        #[arg(long, default_value = "./version.json")]
        file: PathBuf,
    },

    /// Show the current version and timestamp without writing
    Show {
        /// Path to the version record
        #[arg(long, default_value = "./version.json")]
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
