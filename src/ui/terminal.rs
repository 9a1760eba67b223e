//! Line-oriented terminal implementation of the display surface.

use super::layout::Layout;
use super::surface::{DisplaySurface, Selector, UiEvent};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

/// One command line typed at the prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct CommandLine {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Add a note, typing TEXT into the input field first if given
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Type TEXT into the input field without adding it
    Input {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Remove the selected note
    #[command(visible_alias = "rm")]
    Remove,

    /// Select a note by its number or its title
    Select {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        target: Vec<String>,
    },

    /// Clear the selection
    Deselect,

    /// Redraw the list
    #[command(visible_alias = "ls")]
    List,

    /// Quit
    #[command(visible_aliases = ["q", "exit"])]
    Quit,
}

/// Everything after the command word, with the user's spacing intact.
fn rest_of_line(line: &str) -> &str {
    let line = line.trim();
    match line.find(char::is_whitespace) {
        Some(i) => line[i..].trim_start(),
        None => "",
    }
}

/// The free text of a command: the raw rest of the line when it matches the
/// words clap parsed, otherwise the parsed words (clap dropped a `--`).
fn typed_text(words: &[String], rest: &str) -> String {
    if rest.split_whitespace().eq(words.iter().map(String::as_str)) {
        rest.to_string()
    } else {
        words.join(" ")
    }
}

/// Parses one input line into an event. Blank lines yield `Ok(None)`.
pub(crate) fn parse_line(line: &str) -> Result<Option<UiEvent>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }

    let parsed = CommandLine::try_parse_from(&words)?;
    let rest = rest_of_line(line);

    let event = match parsed.action {
        Action::Add { text } if text.is_empty() => UiEvent::Add(None),
        Action::Add { text } => UiEvent::Add(Some(typed_text(&text, rest))),
        Action::Input { text } => UiEvent::Input(typed_text(&text, rest)),
        Action::Remove => UiEvent::Remove,
        Action::Select { target } => {
            let target = typed_text(&target, rest);
            match target.parse::<usize>() {
                Ok(number) => UiEvent::Select(Selector::Number(number)),
                Err(_) => UiEvent::Select(Selector::Title(target)),
            }
        }
        Action::Deselect => UiEvent::Deselect,
        Action::List => UiEvent::Refresh,
        Action::Quit => UiEvent::Quit,
    };
    Ok(Some(event))
}

/// Renders the list through the layout template and reads commands, one per
/// line, from `reader`.
pub struct TerminalSurface<R, W> {
    reader: R,
    writer: W,
    layout: Layout,
    selected: Option<usize>,
    input: String,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(reader: R, writer: W, layout: Layout) -> Self {
        Self {
            reader,
            writer,
            layout,
            selected: None,
            input: String::new(),
        }
    }

    /// Consumes the surface, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> DisplaySurface for TerminalSurface<R, W> {
    fn render(&mut self, items: &[&str]) -> Result<()> {
        let out = match self.layout.render_list(items, self.selected, &self.input) {
            Ok(out) => out,
            Err(e) => {
                log::warn!("{}", e);
                return self.notify(&e.to_string());
            }
        };
        self.writer.write_all(out.as_bytes())?;
        if !out.ends_with('\n') {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, position: Option<usize>) {
        self.selected = position;
    }

    fn input_text(&self) -> &str {
        &self.input
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }

    fn next_event(&mut self) -> Result<Option<UiEvent>> {
        loop {
            write!(self.writer, "{}", self.layout.prompt)?;
            self.writer.flush()?;

            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let Ok(line) = String::from_utf8(buf) else {
                self.notify("error: input is not valid UTF-8, line ignored")?;
                continue;
            };

            match parse_line(&line) {
                Ok(Some(event)) => return Ok(Some(event)),
                Ok(None) => continue,
                Err(err) => {
                    let message = err.render().to_string();
                    self.notify(message.trim_end())?;
                }
            }
        }
    }
}
