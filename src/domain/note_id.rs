//! ULID-based note identity assigned by the store.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use ulid::Ulid;

/// The identity of a persisted note.
///
/// Assigned once by the store when the note is created and stable for the
/// note's lifetime. Stored as the 26-character Crockford Base32 form.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
///
/// let id = NoteId::new();
/// let parsed: NoteId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a fresh identity.
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ULID '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}
