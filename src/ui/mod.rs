//! Display surface, layout resource, configuration and event dispatch

pub mod config;
pub mod controller;
pub mod layout;
pub mod surface;
pub mod terminal;


pub use controller::{Controller, Flow};
pub use layout::{Layout, LayoutError, RenderError};
pub use surface::{DisplaySurface, Selector, UiEvent};
pub use terminal::TerminalSurface;
