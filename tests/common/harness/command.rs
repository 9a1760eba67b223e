//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
///
/// The binary takes no arguments; everything it does is driven by the lines
/// written to its stdin.
pub struct JotCommand {
    workdir: PathBuf,
    home: PathBuf,
    lines: Vec<String>,
}

impl JotCommand {
    /// Creates a command that runs in `workdir` with `home` as its home dir.
    pub fn new(workdir: &Path, home: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            home: home.to_path_buf(),
            lines: Vec::new(),
        }
    }

    /// Appends one line of input.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Appends several lines of input.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Returns the script that will be written to stdin.
    pub fn script(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l)).collect()
    }

    /// Runs the binary and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        cmd.current_dir(&self.workdir)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .write_stdin(self.script());
        cmd.assert()
    }

    /// Runs the binary, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    pub fn add(self, text: &str) -> Self {
        self.line(format!("add {}", text))
    }

    pub fn select(self, target: &str) -> Self {
        self.line(format!("select {}", target))
    }

    pub fn remove(self) -> Self {
        self.line("remove")
    }

    pub fn quit(self) -> Self {
        self.line("quit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_joins_lines() {
        let cmd = JotCommand::new(Path::new("."), Path::new("."))
            .add("Buy milk")
            .select("1")
            .remove()
            .quit();
        assert_eq!(cmd.script(), "add Buy milk\nselect 1\nremove\nquit\n");
    }
}
