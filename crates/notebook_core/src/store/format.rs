//! Versioned document schema for the notebook file.
//!
//! # Responsibility
//! - Define the serialized shape of the whole notebook.
//! - Encode/decode between raw bytes and the in-memory map.
//!
//! # Invariants
//! - `format_version` values are monotonic; readers reject newer files.
//! - Encoding is deterministic: notes serialize in title order.

use super::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Latest document format version written by this binary.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk shape of the entire notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocument {
    /// Schema version of this document.
    pub format_version: u32,
    /// Full title -> content mapping.
    pub notes: BTreeMap<String, String>,
}

impl NotebookDocument {
    /// Creates an empty document at the current format version.
    pub fn empty() -> Self {
        Self::with_notes(BTreeMap::new())
    }

    /// Creates a document at the current format version holding `notes`.
    pub fn with_notes(notes: BTreeMap<String, String>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            notes,
        }
    }
}

/// Decodes one document from raw file bytes.
///
/// # Errors
/// - `Malformed` when the bytes are not a valid document.
/// - `UnsupportedFormatVersion` when the file was written by a newer binary.
pub fn decode_document(bytes: &[u8]) -> StoreResult<NotebookDocument> {
    let document: NotebookDocument = serde_json::from_slice(bytes)?;
    if document.format_version > FORMAT_VERSION {
        return Err(StoreError::UnsupportedFormatVersion {
            file_version: document.format_version,
            latest_supported: FORMAT_VERSION,
        });
    }
    Ok(document)
}

/// Encodes one document to pretty-printed JSON bytes.
///
/// The trailing newline keeps the file friendly to line-oriented tools.
pub fn encode_document(document: &NotebookDocument) -> StoreResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(document)?;
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::{decode_document, encode_document, NotebookDocument, FORMAT_VERSION};
    use crate::store::StoreError;
    use std::collections::BTreeMap;

    #[test]
    fn encode_decode_round_trips() {
        let mut notes = BTreeMap::new();
        notes.insert("a".to_string(), "first".to_string());
        notes.insert("b".to_string(), "second\nline".to_string());
        let document = NotebookDocument::with_notes(notes);

        let bytes = encode_document(&document).unwrap();
        let decoded = decode_document(&bytes).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn decode_rejects_newer_format_version() {
        let raw = format!(
            "{{\"format_version\": {}, \"notes\": {{}}}}",
            FORMAT_VERSION + 1
        );
        let err = decode_document(raw.as_bytes()).unwrap_err();
        match err {
            StoreError::UnsupportedFormatVersion {
                file_version,
                latest_supported,
            } => {
                assert_eq!(file_version, FORMAT_VERSION + 1);
                assert_eq!(latest_supported, FORMAT_VERSION);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_non_document_json() {
        let err = decode_document(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }
}
