//! Test harness for binary integration tests.
//!
//! Provides isolated working directories and a fluent wrapper that feeds
//! command scripts to the `jot` binary using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::JotCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
