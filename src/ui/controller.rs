//! Dispatch table binding surface events to list operations.

use super::surface::{DisplaySurface, Selector, UiEvent};
use crate::projection::NoteList;
use crate::store::{NoteStore, StoreError};
use anyhow::Result;

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Logs a store error that the user is not shown.
///
/// A storage failure means the database misbehaved; anything else is an
/// expected miss and only worth a debug line.
fn report(action: &str, err: &StoreError) {
    if err.is_storage_failure() {
        log::warn!("{} failed, list unchanged: {}", action, err);
    } else {
        log::debug!("{} found nothing, list unchanged: {}", action, err);
    }
}

/// Runs every user action on the calling thread, one at a time.
///
/// Storage failures during add, remove and select are logged and otherwise
/// ignored: the list on screen simply does not change.
pub struct Controller<S: NoteStore, D: DisplaySurface> {
    notes: NoteList<S>,
    surface: D,
}

impl<S: NoteStore, D: DisplaySurface> Controller<S, D> {
    pub fn new(notes: NoteList<S>, surface: D) -> Self {
        Self { notes, surface }
    }

    /// Draws the loaded list, then handles events until quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.refresh()?;
        while let Some(event) = self.surface.next_event()? {
            if self.dispatch(event)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handles a single event.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Flow> {
        match event {
            UiEvent::Add(text) => self.on_add(text)?,
            UiEvent::Input(text) => self.surface.set_input(&text),
            UiEvent::Remove => self.on_remove()?,
            UiEvent::Select(selector) => self.on_select(selector)?,
            UiEvent::Deselect => {
                self.surface.select(None);
                self.refresh()?;
            }
            UiEvent::Refresh => self.refresh()?,
            UiEvent::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn on_add(&mut self, text: Option<String>) -> Result<()> {
        if let Some(text) = text {
            self.surface.set_input(&text);
        }

        let input = self.surface.input_text().to_string();
        match self.notes.add(&input) {
            Ok(Some(_)) => {
                self.surface.clear_input();
                self.refresh()
            }
            Ok(None) => Ok(()),
            Err(e) => {
                report("add", &e);
                Ok(())
            }
        }
    }

    fn on_remove(&mut self) -> Result<()> {
        let selected = self.surface.selected();
        match self.notes.remove(selected) {
            Ok(Some(_)) => {
                self.surface.select(None);
                self.refresh()
            }
            Ok(None) => Ok(()),
            Err(e) => {
                report("remove", &e);
                Ok(())
            }
        }
    }

    fn on_select(&mut self, selector: Selector) -> Result<()> {
        let position = match selector {
            Selector::Number(n) if (1..=self.notes.len()).contains(&n) => Some(n - 1),
            Selector::Number(n) => {
                return self.surface.notify(&format!("no note #{}", n));
            }
            Selector::Title(title) => match self.notes.locate_title(&title) {
                Ok(Some(position)) => Some(position),
                Ok(None) => {
                    return self.surface.notify(&format!("no note titled '{}'", title.trim()));
                }
                Err(e) => {
                    report("select", &e);
                    return Ok(());
                }
            },
        };

        self.surface.select(position);
        self.refresh()
    }

    /// Signals the surface that the list layout changed.
    fn refresh(&mut self) -> Result<()> {
        let items = self.notes.items();
        self.surface.render(&items)
    }

    pub fn notes(&self) -> &NoteList<S> {
        &self.notes
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Consumes the controller, returning the surface.
    pub fn into_surface(self) -> D {
        self.surface
    }
}
