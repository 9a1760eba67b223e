//! NoteStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Note, NoteId, Title};
use crate::store::{NoteStore, StoreError, StoreResult};
use rusqlite::params;

/// Rebuilds a note from the raw column values of one row.
fn note_from_row(id: &str, title: &str, active: bool) -> StoreResult<Note> {
    let id: NoteId = id
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("invalid note ID in database: {}", e)))?;
    let title = Title::parse(title)
        .map_err(|e| StoreError::Corrupt(format!("note {}: {}", id, e)))?;
    Ok(Note::new(id, title, active))
}

impl NoteStore for SqliteStore {
    fn create(&mut self, title: &Title) -> StoreResult<Note> {
        let id = NoteId::new();

        let tx = self.transaction()?;
        tx.execute(
            "INSERT INTO notes (id, title, active) VALUES (?1, ?2, 0)",
            params![id.to_string(), title.as_str()],
        )?;
        tx.commit()?;

        Ok(Note::new(id, title.clone(), false))
    }

    fn list_all(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, active FROM notes ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, bool>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.iter()
            .map(|(id, title, active)| note_from_row(id, title, *active))
            .collect()
    }

    fn find_by_title(&self, title: &str) -> StoreResult<Note> {
        let wanted = title.trim();
        let row = self.conn.query_row(
            "SELECT id, title, active FROM notes WHERE title = ?1 ORDER BY rowid LIMIT 1",
            [wanted],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, bool>(2)?,
                ))
            },
        );

        let (id, title, active) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(StoreError::NotFound {
                    title: wanted.to_string(),
                });
            }
            Err(e) => return Err(StoreError::Database(e)),
        };

        note_from_row(&id, &title, active)
    }

    fn delete(&mut self, note: &Note) -> StoreResult<()> {
        let tx = self.transaction()?;
        let removed = tx.execute("DELETE FROM notes WHERE id = ?1", [note.id().to_string()])?;
        if removed == 0 {
            // Dropping the transaction rolls it back
            return Err(StoreError::MissingRow {
                id: note.id().clone(),
            });
        }
        tx.commit()
    }
}
