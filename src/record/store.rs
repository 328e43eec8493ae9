//! Record persistence
//!
//! `RecordStore` is the load/save seam; `JsonFileStore` is the
//! file-backed implementation over a single JSON document. The document
//! path is supplied explicitly at construction, never resolved from
//! module state. Saves are atomic with respect to a single writer:
//! write a sibling temp file, fsync, rename over the target.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::errors::{RecordError, RecordResult};
use super::record::VersionRecord;

/// Load/save interface for the persisted record
pub trait RecordStore {
    /// Loads the record from the backing document.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` if the document is absent,
    /// `RecordError::Parse` if it is malformed.
    fn load(&self) -> RecordResult<VersionRecord>;

    /// Overwrites the backing document with the record.
    fn save(&self, record: &VersionRecord) -> RecordResult<()>;
}

/// File-backed record store over a single JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> RecordResult<VersionRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RecordError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(RecordError::io(self.path.display().to_string(), e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| RecordError::Parse(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&self, record: &VersionRecord) -> RecordResult<()> {
        let bytes = render_document(record)?;
        let tmp = tmp_path(&self.path);

        let mut file =
            File::create(&tmp).map_err(|e| RecordError::io(tmp.display().to_string(), e))?;
        file.write_all(&bytes)
            .map_err(|e| RecordError::io(tmp.display().to_string(), e))?;
        file.sync_all()
            .map_err(|e| RecordError::io(tmp.display().to_string(), e))?;
        drop(file);

        fs::rename(&tmp, &self.path)
            .map_err(|e| RecordError::io(self.path.display().to_string(), e))?;
        Ok(())
    }
}

/// Renders the record as pretty JSON with 4-space indentation and a
/// trailing newline, the document's on-disk format.
fn render_document(record: &VersionRecord) -> RecordResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record
        .serialize(&mut ser)
        .map_err(|e| RecordError::Serialize(e.to_string()))?;
    buf.push(b'\n');
    Ok(buf)
}

/// Sibling temp path: `version.json` -> `version.json.tmp`
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
