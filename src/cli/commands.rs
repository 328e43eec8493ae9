//! CLI command implementations
//!
//! Every mutating command is a single load -> compute -> save pass over
//! the record; `show` never writes. Any failure aborts before the save,
//! leaving the previous document intact.

use std::path::Path;

use crate::clock;
use crate::record::{JsonFileStore, RecordStore};
use crate::version::{Bump, ParsedVersion};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse command line arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Patch { file } => bump(&file, Bump::Patch),
        Command::Minor { file } => bump(&file, Bump::Minor),
        Command::Major { file } => bump(&file, Bump::Major),
        Command::Test { file } => bump(&file, Bump::Test),
        Command::Release { file } => bump(&file, Bump::Release),
        Command::Show { file } => show(&file),
    }
}

/// Print the stored version and timestamp without writing
pub fn show(file: &Path) -> CliResult<()> {
    let store = JsonFileStore::new(file);
    let record = store.load()?;

    // A corrupt record aborts even a read-only invocation
    ParsedVersion::parse(&record.version)?;

    println!("Current version: {}", record.version);
    println!("Timestamp: {}", record.timestamp);
    Ok(())
}

/// Apply one transition to the record at `file` and write it back
pub fn bump(file: &Path, bump: Bump) -> CliResult<()> {
    let store = JsonFileStore::new(file);
    apply_bump(&store, bump)
}

/// One load -> compute -> save pass over any record store
pub fn apply_bump<S: RecordStore>(store: &S, bump: Bump) -> CliResult<()> {
    let mut record = store.load()?;
    let parsed = ParsedVersion::parse(&record.version)?;

    let old_version = record.version.clone();
    record.version = bump.apply(parsed).to_string();
    record.timestamp = clock::now_utc();
    store.save(&record)?;

    println!("Version bumped: {} -> {}", old_version, record.version);
    println!("Timestamp: {}", record.timestamp);
    Ok(())
}
