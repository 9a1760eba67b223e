//! NoteStore trait and error types.

use crate::domain::{Note, NoteId, Title};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No stored note has the requested title.
    #[error("note not found: {title}")]
    NotFound { title: String },

    /// The row targeted by a delete no longer exists.
    #[error("note {id} is not in the store")]
    MissingRow { id: NoteId },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored row could not be turned back into a note.
    #[error("corrupt row: {0}")]
    Corrupt(String),
}

impl StoreError {
    /// Returns true if the store could not commit or serve the operation.
    ///
    /// Everything except a failed title lookup counts as a storage failure.
    pub fn is_storage_failure(&self) -> bool {
        !matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable persistence of notes.
///
/// Every operation is synchronous and fails closed: when an error is
/// returned, storage is left exactly as it was.
pub trait NoteStore {
    /// Persists a new note with a fresh identity and `active = false`.
    fn create(&mut self, title: &Title) -> StoreResult<Note>;

    /// Returns every stored note, oldest first.
    fn list_all(&self) -> StoreResult<Vec<Note>>;

    /// Finds a note by its exact (trimmed) title.
    ///
    /// When several notes share the title, the oldest one is returned.
    fn find_by_title(&self, title: &str) -> StoreResult<Note>;

    /// Removes the row with the note's identity.
    ///
    /// Fails with [`StoreError::MissingRow`] if no such row exists.
    fn delete(&mut self, note: &Note) -> StoreResult<()>;
}
