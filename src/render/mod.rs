//! Rendering module for converting documents to various output formats.
//!
//! Every renderer is a pure function of the document: the same document
//! always renders to byte-identical output.

mod html;
mod json;
mod lines;
mod markdown;
mod text;

pub use html::{to_html, STYLESHEET};
pub use json::{to_json, JsonFormat};
pub use lines::{block_lines, split_row, table_row};
pub use markdown::to_markdown;
pub use text::to_text;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Document;

/// Output format for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Plain text with section banners
    #[default]
    Text,

    /// Markdown
    Markdown,

    /// Standalone HTML page
    Html,
}

impl OutputFormat {
    /// All formats.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Html];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" | "htm" => Ok(OutputFormat::Html),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render a document in the given format.
pub fn render(doc: &Document, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => to_text(doc),
        OutputFormat::Markdown => to_markdown(doc),
        OutputFormat::Html => to_html(doc),
    }
}

/// Render a document in a format given by name.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown format names.
pub fn render_as(doc: &Document, format: &str) -> Result<String> {
    Ok(render(doc, format.parse()?))
}
