//! In-memory list projection of the note store.
//!
//! [`NoteList`] mirrors the store's rows in creation order and is only ever
//! mutated after the matching store operation has succeeded, so the two never
//! drift apart in a single-threaded program.


use crate::domain::{Note, NoteId, Title};
use crate::store::{NoteStore, StoreError, StoreResult};

/// One cached row of the projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: NoteId,
    pub active: bool,
    pub title: String,
}

impl From<Note> for ListEntry {
    fn from(note: Note) -> Self {
        let (id, title, active) = note.into_parts();
        Self {
            id,
            active,
            title: title.as_str().to_string(),
        }
    }
}

/// Ordered mirror of the store, owning the store it mirrors.
pub struct NoteList<S: NoteStore> {
    store: S,
    entries: Vec<ListEntry>,
}

impl<S: NoteStore> NoteList<S> {
    /// Builds the projection from a single `list_all()` call.
    pub fn load(store: S) -> StoreResult<Self> {
        let entries: Vec<ListEntry> = store
            .list_all()?
            .into_iter()
            .map(ListEntry::from)
            .collect();
        log::info!("loaded {} notes", entries.len());
        Ok(Self { store, entries })
    }

    /// Adds a note with the trimmed `text`.
    ///
    /// Returns `Ok(None)` without touching the store when `text` is blank, and
    /// `Ok(Some(position))` of the appended entry on success. On error the
    /// projection is unchanged.
    pub fn add(&mut self, text: &str) -> StoreResult<Option<usize>> {
        let Ok(title) = Title::parse(text) else {
            return Ok(None);
        };

        let note = self.store.create(&title)?;
        log::debug!("added note {}", note.id());
        self.entries.push(note.into());
        Ok(Some(self.entries.len() - 1))
    }

    /// Removes the note at `selection`.
    ///
    /// The identity comes from the cached entry, so duplicate titles never
    /// resolve to the wrong row. Returns `Ok(None)` when nothing is selected or
    /// the position is out of range. On error the projection is unchanged.
    pub fn remove(&mut self, selection: Option<usize>) -> StoreResult<Option<Note>> {
        let Some(position) = selection else {
            return Ok(None);
        };
        let Some(entry) = self.entries.get(position) else {
            return Ok(None);
        };

        let title = Title::parse(&entry.title)
            .map_err(|e| StoreError::Corrupt(format!("cached entry {}: {}", entry.id, e)))?;
        let note = Note::new(entry.id.clone(), title, entry.active);

        self.store.delete(&note)?;
        log::debug!("removed note {}", note.id());
        self.entries.remove(position);
        Ok(Some(note))
    }

    /// Resolves displayed text to the position of its persisted note.
    ///
    /// Goes through the store's title lookup, so with duplicate titles the
    /// oldest note wins. Returns `Ok(None)` if nothing matches.
    pub fn locate_title(&self, text: &str) -> StoreResult<Option<usize>> {
        match self.store.find_by_title(text) {
            Ok(note) => Ok(self.position_of(note.id())),
            Err(StoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Returns the position of the entry with the given identity.
    pub fn position_of(&self, id: &NoteId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    /// Returns the display text of the entry at `position`.
    pub fn display_text(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(|e| e.title.as_str())
    }

    /// Returns every display string, in order.
    pub fn items(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
