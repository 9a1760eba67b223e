//! Core types: Note, Title, NoteId (ULID)

mod note;
mod note_id;

pub use note::{Note, ParseTitleError, Title};
pub use note_id::{NoteId, ParseNoteIdError};
