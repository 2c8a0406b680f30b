//! Note domain model.
//!
//! # Responsibility
//! - Define the (title, content) record keyed by title.
//! - Provide the validation contract invoked by every write path.
//!
//! # Invariants
//! - `title` is non-empty after trimming and acts as the unique key.
//! - `content` is non-empty; multi-line text is allowed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A single note.
///
/// The title doubles as the storage key, so two notes can never share a
/// title: writing a note under an existing title replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note title (storage key). Stored trimmed.
    pub title: String,
    /// Free-form note body.
    pub content: String,
}

/// Validation failure for note write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Content is empty.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be empty"),
            Self::EmptyContent => write!(f, "note content cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates a note, trimming surrounding whitespace off the title.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            content: content.into(),
        }
    }

    /// Checks write invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is empty or whitespace-only.
    /// - `EmptyContent` when the content is empty.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteValidationError};

    #[test]
    fn new_trims_title_whitespace() {
        let note = Note::new("  groceries  ", "milk");
        assert_eq!(note.title, "groceries");
    }

    #[test]
    fn validate_accepts_multi_line_content() {
        let note = Note::new("plan", "line one\nline two\n");
        assert!(note.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_title() {
        let note = Note::new("   ", "content");
        assert_eq!(note.validate(), Err(NoteValidationError::EmptyTitle));
    }

    #[test]
    fn validate_rejects_empty_content() {
        let note = Note::new("title", "");
        assert_eq!(note.validate(), Err(NoteValidationError::EmptyContent));
    }
}
