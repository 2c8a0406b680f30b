//! File I/O for the notebook document.
//!
//! # Responsibility
//! - Read the backing file as one unit, treating absence as first-run state.
//! - Replace the backing file through a temp-file rename on save.
//! - Emit store I/O logging events with duration and status.
//!
//! # Invariants
//! - No file handle is held between calls.
//! - Reading never creates the backing file.
//! - A failed write leaves the previous document intact.

use super::format::{decode_document, encode_document, NotebookDocument};
use super::StoreResult;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads the whole notebook document from `path`.
///
/// A missing file yields an empty document; so does an existing zero-length
/// file, which some editors leave behind.
///
/// # Errors
/// - `Io` when the file exists but cannot be read.
/// - `Malformed` / `UnsupportedFormatVersion` when decoding fails.
pub fn read_document(path: impl AsRef<Path>) -> StoreResult<NotebookDocument> {
    let path = path.as_ref();
    let started_at = Instant::now();

    if !path.exists() {
        info!("event=store_read module=store status=ok mode=bootstrap notes=0");
        return Ok(NotebookDocument::empty());
    }

    let result = read_existing(path);
    match &result {
        Ok(document) => info!(
            "event=store_read module=store status=ok mode=file notes={} duration_ms={}",
            document.notes.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_read module=store status=error error_code=store_read_failed duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

/// Writes the whole notebook document to `path`, replacing prior contents.
///
/// The document is first written to a sibling temp file and then renamed
/// into place, so a crash mid-write cannot truncate the previous file.
///
/// # Errors
/// - `Io` when the temp file cannot be written or renamed.
pub fn write_document(path: impl AsRef<Path>, document: &NotebookDocument) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = write_replacing(path, document);
    match &result {
        Ok(()) => info!(
            "event=store_write module=store status=ok notes={} duration_ms={}",
            document.notes.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_write module=store status=error error_code=store_write_failed duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

fn read_existing(path: &Path) -> StoreResult<NotebookDocument> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Ok(NotebookDocument::empty());
    }
    decode_document(&bytes)
}

fn write_replacing(path: &Path, document: &NotebookDocument) -> StoreResult<()> {
    let bytes = encode_document(document)?;
    let temp_path = temp_sibling(path);
    fs::write(&temp_path, &bytes)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

// Sibling path keeps the temp file on the same filesystem, so the final
// rename stays atomic.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::{read_document, temp_sibling, write_document};
    use crate::store::format::NotebookDocument;
    use std::collections::BTreeMap;
    use std::path::Path;

    #[test]
    fn temp_sibling_appends_suffix_in_same_directory() {
        let temp = temp_sibling(Path::new("/data/notebook.json"));
        assert_eq!(temp, Path::new("/data/notebook.json.tmp"));
    }

    #[test]
    fn missing_file_reads_as_empty_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let document = read_document(&path).unwrap();
        assert!(document.notes.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn write_then_read_returns_same_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notebook.json");

        let mut notes = BTreeMap::new();
        notes.insert("todo".to_string(), "buy milk".to_string());
        let document = NotebookDocument::with_notes(notes);

        write_document(&path, &document).unwrap();
        assert!(!temp_sibling(&path).exists());
        assert_eq!(read_document(&path).unwrap(), document);
    }

    #[test]
    fn zero_length_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, b"").unwrap();

        let document = read_document(&path).unwrap();
        assert!(document.notes.is_empty());
    }
}
