//! Layout resource for the terminal list view.
//!
//! The layout file plays the part a window definition plays for a GUI
//! toolkit: the program refuses to start without it. It is a TOML document
//! with a window `title`, an input `prompt` and an optional `list_template`
//! written in minijinja syntax.

use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default template for the list view.
///
/// Context: `title`, `count`, `input`, and `items`, where each item has
/// `number` (1-based), `text` and `selected`.
pub const DEFAULT_LIST_TEMPLATE: &str = "{{ title }} ({{ count }})\n\
{% for item in items %}{{ '>' if item.selected else ' ' }} {{ item.number }}. {{ item.text }}\n\
{% else %}  (no notes)\n{% endfor %}";

const DEFAULT_PROMPT: &str = "> ";

/// Errors that can occur while loading a layout.
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout file could not be read.
    #[error("cannot open layout {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout file is not valid TOML or misses required keys.
    #[error("cannot parse layout {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The list template does not compile.
    #[error("invalid list template in {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },
}

/// A template that compiled at load time failed while rendering.
///
/// Kept apart from [`LayoutError`]: it happens mid-session and is not fatal.
#[derive(Debug, Error)]
#[error("failed to render list: {0}")]
pub struct RenderError(#[from] minijinja::Error);

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_list_template() -> String {
    DEFAULT_LIST_TEMPLATE.to_string()
}

/// A loaded and validated layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// Window title shown above the list
    pub title: String,

    /// Prompt printed before each command is read
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// minijinja source for the list view
    #[serde(default = "default_list_template")]
    pub list_template: String,
}

/// Compiles `source` once so syntax errors surface at startup.
fn check_template(source: &str) -> Result<(), minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("list", source)
}

#[derive(Debug, Serialize)]
struct ItemView<'a> {
    number: usize,
    text: &'a str,
    selected: bool,
}

impl Layout {
    /// Reads and validates the layout at `path`.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let source = std::fs::read_to_string(path).map_err(|e| LayoutError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&source, path)
    }

    /// Parses layout `source`; `path` is only used in error messages.
    pub fn parse(source: &str, path: &Path) -> Result<Self, LayoutError> {
        let layout: Layout = toml::from_str(source).map_err(|e| LayoutError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        check_template(&layout.list_template).map_err(|e| LayoutError::Template {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(layout)
    }

    /// Renders the list view for `items` with the given selection and input.
    pub fn render_list(
        &self,
        items: &[&str],
        selected: Option<usize>,
        input: &str,
    ) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.add_template("list", &self.list_template)?;
        let tmpl = env.get_template("list")?;

        let views: Vec<ItemView<'_>> = items
            .iter()
            .enumerate()
            .map(|(i, text)| ItemView {
                number: i + 1,
                text: *text,
                selected: selected == Some(i),
            })
            .collect();

        Ok(tmpl.render(context! {
            title => &self.title,
            count => items.len(),
            input => input,
            items => views,
        })?)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: "Notes".to_string(),
            prompt: default_prompt(),
            list_template: default_list_template(),
        }
    }
}
