//! SQLite-backed note store.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns the single database connection for the life of the process. There is
/// no global handle: the store is constructed once and handed to whoever
/// needs it.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
