//! Embeds the current version record at compile time.
//!
//! Reads `version.json` next to the manifest and exposes its `version`
//! and `timestamp` fields as rustc env vars. A missing or unreadable
//! record falls back to the crate version and an empty timestamp so a
//! fresh checkout still builds.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=version.json");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let record_path = Path::new(&manifest_dir).join("version.json");

    let (version, timestamp) = read_record(&record_path);
    let version =
        version.unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_default());
    let timestamp = timestamp.unwrap_or_default();

    println!("cargo:rustc-env=VERBUMP_VERSION={}", version);
    println!("cargo:rustc-env=VERBUMP_TIMESTAMP={}", timestamp);
}

fn read_record(path: &Path) -> (Option<String>, Option<String>) {
    let Ok(content) = fs::read_to_string(path) else {
        return (None, None);
    };
    let Ok(doc) = serde_json::from_str::<serde_json::Value>(&content) else {
        return (None, None);
    };
    (
        doc.get("version").and_then(|v| v.as_str()).map(str::to_owned),
        doc.get("timestamp").and_then(|v| v.as_str()).map(str::to_owned),
    )
}
