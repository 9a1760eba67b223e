//! Isolated test environment with temp directory.

use super::JotCommand;
use crate::common::shipped_layout;
use jot::domain::Title;
use jot::store::{NoteStore, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for one run of the binary.
///
/// Holds the layout file and the database the binary uses by default, plus
/// a private home directory so no real user config is picked up.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    workdir: PathBuf,
    home: PathBuf,
}

impl TestEnv {
    /// Creates an environment with the shipped layout in place.
    pub fn new() -> Self {
        let env = Self::without_layout();
        std::fs::copy(shipped_layout(), env.workdir.join("window.toml"))
            .expect("Failed to copy layout");
        env
    }

    /// Creates an environment with no layout file.
    pub fn without_layout() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let workdir = temp_dir.path().join("work");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&workdir).expect("Failed to create workdir");
        std::fs::create_dir_all(&home).expect("Failed to create home");
        Self {
            _temp_dir: temp_dir,
            workdir,
            home,
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Path of the database the binary opens by default.
    pub fn db_path(&self) -> PathBuf {
        self.workdir.join("notes.db")
    }

    /// Writes `~/.config/jot/config.toml` for the binary.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".config").join("jot");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Writes a file into the working directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.workdir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Inserts notes directly into the default database.
    pub fn seed(&self, titles: &[&str]) {
        let mut store = SqliteStore::open(&self.db_path()).expect("Failed to open store");
        for title in titles {
            store
                .create(&Title::parse(title).expect("Invalid title"))
                .expect("Failed to seed note");
        }
    }

    /// Returns the titles stored in the default database, oldest first.
    pub fn stored_titles(&self) -> Vec<String> {
        let store = SqliteStore::open(&self.db_path()).expect("Failed to open store");
        store
            .list_all()
            .expect("Failed to list notes")
            .iter()
            .map(|n| n.title().to_string())
            .collect()
    }

    /// Creates a JotCommand configured for this environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new(&self.workdir, &self.home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
