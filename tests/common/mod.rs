//! Shared utilities for integration tests.

pub mod harness;

use std::path::PathBuf;

/// Returns the path to the layout shipped at the repository root.
pub fn shipped_layout() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("window.toml")
}
