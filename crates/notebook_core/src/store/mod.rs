//! Whole-file notebook storage bootstrap.
//!
//! # Responsibility
//! - Own the versioned on-disk document schema.
//! - Read and write the backing file as a single unit.
//!
//! # Invariants
//! - The format version is tracked inside the document itself.
//! - A missing backing file means "no notes yet", never an error.
//! - Core code must not interpret documents newer than `FORMAT_VERSION`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

mod file;
pub mod format;

pub use file::{read_document, write_document};
pub use format::{decode_document, encode_document, NotebookDocument, FORMAT_VERSION};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Malformed(serde_json::Error),
    UnsupportedFormatVersion {
        file_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed notebook file: {err}"),
            Self::UnsupportedFormatVersion {
                file_version,
                latest_supported,
            } => write!(
                f,
                "notebook format version {file_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::UnsupportedFormatVersion { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}
