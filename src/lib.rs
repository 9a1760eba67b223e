//! jot - a list of short notes kept in a local SQLite file

pub mod domain;
pub mod projection;
pub mod store;
pub mod ui;

use anyhow::{Context, Result};
use std::io;

use projection::NoteList;
use store::SqliteStore;
use ui::{Controller, Layout, TerminalSurface, config::Config};

/// Exit status when the layout resource cannot be loaded (-1 as a byte).
pub const RESOURCE_LOAD_EXIT: u8 = 255;

fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .parse_filters(config.log_level())
        .format_timestamp(None)
        .init();
}

/// Main entry point for the application.
///
/// Loads the layout before touching the database, so a missing layout leaves
/// no trace on disk.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config);

    let layout = Layout::load(&config.layout())?;

    let db_path = config.database();
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open note store: {}", db_path.display()))?;
    let notes = NoteList::load(store).context("failed to load notes")?;

    let surface = TerminalSurface::new(io::stdin().lock(), io::stdout().lock(), layout);
    Controller::new(notes, surface).run()
}
