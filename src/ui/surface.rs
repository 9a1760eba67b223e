//! The display surface contract and the events it produces.

use anyhow::Result;

/// How the user picked a note to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 1-based position, as shown in the list
    Number(usize),
    /// Displayed title text
    Title(String),
}

/// A discrete user action reported by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Add pressed, optionally after typing text into the input field
    Add(Option<String>),
    /// Text typed into the input field
    Input(String),
    /// Remove triggered for the current selection
    Remove,
    Select(Selector),
    Deselect,
    /// Redraw the list without changing anything
    Refresh,
    Quit,
}

/// Something that shows the note list and reports user actions.
///
/// The surface owns the selection and the free-text input field; the
/// controller reads and clears them around store operations.
pub trait DisplaySurface {
    /// Redraws the list with `items` in order.
    fn render(&mut self, items: &[&str]) -> Result<()>;

    /// Returns the selected position, if any.
    fn selected(&self) -> Option<usize>;

    fn select(&mut self, position: Option<usize>);

    /// Returns the current content of the input field.
    fn input_text(&self) -> &str;

    fn set_input(&mut self, text: &str);

    fn clear_input(&mut self);

    /// Shows a message that is not part of the list.
    fn notify(&mut self, message: &str) -> Result<()>;

    /// Blocks until the next event. `None` means the input is exhausted.
    fn next_event(&mut self) -> Result<Option<UiEvent>>;
}
