//! SQLite schema creation for the note store.

use rusqlite::Connection;

/// Creates the `notes` table if it does not exist yet.
///
/// Idempotent. There is no migration step: an existing table is used as-is.
/// Creation order is tracked by the implicit `rowid`, so the table must not
/// be declared `WITHOUT ROWID`.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 0
        );",
    )?;

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_notes_title ON notes(title);")?;

    Ok(())
}
