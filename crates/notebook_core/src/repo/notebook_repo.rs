//! Notebook repository contract and file/memory implementations.
//!
//! # Responsibility
//! - Provide title-keyed note persistence APIs.
//! - Flush the entire map to the backing file on every mutation.
//!
//! # Invariants
//! - Write paths must call `Note::validate()` before mutating state.
//! - Re-adding an existing title replaces its content.
//! - A delete miss performs no write and leaves the backing file untouched.

use crate::model::note::{Note, NoteValidationError};
use crate::store::{read_document, write_document, NotebookDocument, StoreError};
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for notebook persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for notebook operations.
pub trait NotebookRepository {
    /// Inserts or replaces one note, then persists the full map.
    fn add_note(&mut self, note: &Note) -> RepoResult<()>;
    /// Removes one note by title, then persists the full map.
    ///
    /// Returns `false` on a miss without touching the backing store.
    fn delete_note(&mut self, title: &str) -> RepoResult<bool>;
    /// Gets one note by exact title.
    fn get_note(&self, title: &str) -> RepoResult<Option<Note>>;
    /// Lists all notes sorted by title. Returned notes are copies; mutating
    /// them never reaches repository state.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Returns the number of stored notes.
    fn count_notes(&self) -> RepoResult<usize>;
}

/// File-backed notebook repository with whole-map flush semantics.
///
/// The entire document is rewritten on every mutation; the map stays small
/// enough that incremental persistence would buy nothing.
#[derive(Debug)]
pub struct FileNotebookRepository {
    path: PathBuf,
    notes: BTreeMap<String, String>,
}

impl FileNotebookRepository {
    /// Opens a repository over `path`, eagerly loading existing notes.
    ///
    /// A nonexistent file yields an empty repository; the file is only
    /// created by the first successful mutation.
    ///
    /// # Errors
    /// - `Store` when the file exists but cannot be read or decoded.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let document = read_document(&path)?;
        Ok(Self {
            path,
            notes: document.notes,
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> RepoResult<()> {
        let document = NotebookDocument::with_notes(self.notes.clone());
        write_document(&self.path, &document)?;
        Ok(())
    }
}

impl NotebookRepository for FileNotebookRepository {
    fn add_note(&mut self, note: &Note) -> RepoResult<()> {
        note.validate()?;

        self.notes
            .insert(note.title.clone(), note.content.clone());
        self.flush()?;
        info!(
            "event=note_add module=repo status=ok notes={}",
            self.notes.len()
        );
        Ok(())
    }

    fn delete_note(&mut self, title: &str) -> RepoResult<bool> {
        if self.notes.remove(title).is_none() {
            return Ok(false);
        }

        self.flush()?;
        info!(
            "event=note_delete module=repo status=ok notes={}",
            self.notes.len()
        );
        Ok(true)
    }

    fn get_note(&self, title: &str) -> RepoResult<Option<Note>> {
        Ok(self.notes.get(title).map(|content| Note {
            title: title.to_string(),
            content: content.clone(),
        }))
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        Ok(self
            .notes
            .iter()
            .map(|(title, content)| Note {
                title: title.clone(),
                content: content.clone(),
            })
            .collect())
    }

    fn count_notes(&self) -> RepoResult<usize> {
        Ok(self.notes.len())
    }
}

/// In-memory notebook repository.
///
/// Shares the file repository's contract minus durability; used by tests
/// and as the substitution seam for alternative storage backends.
#[derive(Debug, Default)]
pub struct MemoryNotebookRepository {
    notes: BTreeMap<String, String>,
}

impl MemoryNotebookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotebookRepository for MemoryNotebookRepository {
    fn add_note(&mut self, note: &Note) -> RepoResult<()> {
        note.validate()?;
        self.notes
            .insert(note.title.clone(), note.content.clone());
        Ok(())
    }

    fn delete_note(&mut self, title: &str) -> RepoResult<bool> {
        Ok(self.notes.remove(title).is_some())
    }

    fn get_note(&self, title: &str) -> RepoResult<Option<Note>> {
        Ok(self.notes.get(title).map(|content| Note {
            title: title.to_string(),
            content: content.clone(),
        }))
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        Ok(self
            .notes
            .iter()
            .map(|(title, content)| Note {
                title: title.clone(),
                content: content.clone(),
            })
            .collect())
    }

    fn count_notes(&self) -> RepoResult<usize> {
        Ok(self.notes.len())
    }
}
