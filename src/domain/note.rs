//! The persisted note and its validated title.

use crate::domain::NoteId;
use std::fmt;

/// The kind of error that occurred when validating a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseTitleErrorKind {
    Blank,
}

/// Error returned when a title is empty after trimming.
#[derive(Debug, Clone)]
pub struct ParseTitleError {
    kind: ParseTitleErrorKind,
}

impl fmt::Display for ParseTitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseTitleErrorKind::Blank => write!(f, "invalid title: cannot be blank"),
        }
    }
}

impl std::error::Error for ParseTitleError {}

/// A note title: non-empty, with surrounding whitespace removed.
///
/// Interior whitespace, including newlines, is preserved as typed.
///
/// # Examples
///
/// ```
/// use jot::domain::Title;
///
/// let title = Title::parse("  Buy milk \n").unwrap();
/// assert_eq!(title.as_str(), "Buy milk");
/// assert!(Title::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Trims `text` and accepts it if anything is left.
    pub fn parse(text: &str) -> Result<Self, ParseTitleError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseTitleError {
                kind: ParseTitleErrorKind::Blank,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A note as held by the store.
///
/// Notes are immutable once created: there is no way to change the title or
/// the active flag through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    title: Title,
    active: bool,
}

impl Note {
    /// Creates a note from its stored parts.
    pub fn new(id: NoteId, title: Title, active: bool) -> Self {
        Self { id, title, active }
    }

    /// Returns the store-assigned identity.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the active flag. Always `false` for notes created by this crate.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Splits the note into its parts.
    pub fn into_parts(self) -> (NoteId, Title, bool) {
        (self.id, self.title, self.active)
    }
}
