//! Notebook use-case service.
//!
//! # Responsibility
//! - Provide add/delete/get/list APIs for presentation shells.
//! - Normalize title input before it reaches storage.
//! - Derive single-line preview projections for list rendering.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Note list is always sorted by title.
//! - Preview text contains no line breaks and is capped at 80 characters.

use crate::model::note::{Note, NoteValidationError};
use crate::repo::notebook_repo::{NotebookRepository, RepoError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const PREVIEW_MAX_CHARS: usize = 80;

/// Service error for notebook use-cases.
#[derive(Debug)]
pub enum NotebookServiceError {
    /// Title input is empty or whitespace-only.
    InvalidTitle,
    /// Content input is empty.
    InvalidContent,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NotebookServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "note title cannot be empty"),
            Self::InvalidContent => write!(f, "note content cannot be empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotebookServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NotebookServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(NoteValidationError::EmptyTitle) => Self::InvalidTitle,
            RepoError::Validation(NoteValidationError::EmptyContent) => Self::InvalidContent,
            other => Self::Repo(other),
        }
    }
}

/// Read model for note list/detail use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// Unique note title (storage key).
    pub title: String,
    /// Full note body.
    pub content: String,
    /// Derived single-line preview for list rendering.
    pub preview: String,
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResult {
    /// List items sorted by title.
    pub items: Vec<NoteRecord>,
    /// Total number of stored notes.
    pub total: usize,
}

/// Notebook service facade over repository implementations.
pub struct NotebookService<R: NotebookRepository> {
    repo: R,
}

impl<R: NotebookRepository> NotebookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one note, replacing any previous note with the same title.
    ///
    /// Returns the stored record so callers can re-render from it.
    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<NoteRecord, NotebookServiceError> {
        let note = Note::new(title, content);
        self.repo.add_note(&note)?;
        Ok(note_record(note))
    }

    /// Deletes one note by title. A miss returns `false` without error.
    pub fn delete_note(&mut self, title: &str) -> Result<bool, NotebookServiceError> {
        Ok(self.repo.delete_note(title.trim())?)
    }

    /// Gets one note by title.
    pub fn get_note(&self, title: &str) -> Result<Option<NoteRecord>, NotebookServiceError> {
        Ok(self.repo.get_note(title.trim())?.map(note_record))
    }

    /// Lists all notes sorted by title with derived previews.
    pub fn list_notes(&self) -> Result<NotesListResult, NotebookServiceError> {
        let items: Vec<NoteRecord> = self
            .repo
            .list_notes()?
            .into_iter()
            .map(note_record)
            .collect();
        let total = items.len();
        Ok(NotesListResult { items, total })
    }
}

fn note_record(note: Note) -> NoteRecord {
    let preview = derive_preview(&note.content);
    NoteRecord {
        title: note.title,
        content: note.content,
        preview,
    }
}

/// Derives a one-line preview from note content.
///
/// Rules:
/// - Whitespace runs (including newlines) collapse to single spaces.
/// - The result is trimmed and capped at 80 characters.
pub fn derive_preview(content: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(content, " ");
    let trimmed = normalized.trim();
    let mut preview: String = trimmed.chars().take(PREVIEW_MAX_CHARS).collect();
    if trimmed.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::derive_preview;

    #[test]
    fn preview_collapses_newlines_to_single_spaces() {
        let preview = derive_preview("first line\nsecond\t line\n");
        assert_eq!(preview, "first line second line");
    }

    #[test]
    fn preview_caps_length_with_ellipsis() {
        let long = "x".repeat(200);
        let preview = derive_preview(&long);
        assert_eq!(preview.chars().count(), 83);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_of_short_content_is_unchanged() {
        assert_eq!(derive_preview("buy milk"), "buy milk");
    }
}
