//! Block-level content types.

use super::{ListItem, Table};
use serde::{Deserialize, Serialize};

/// One classified unit of section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Subsection heading
    Heading { text: String },

    /// Paragraph of cleaned text
    Paragraph { text: String },

    /// Nested list
    List { items: Vec<ListItem> },

    /// Table with optional header
    Table(Table),

    /// Highlighted note, warning or tip
    Callout { kind: CalloutKind, text: String },

    /// Image with absolute URL and caption
    Image { url: String, caption: String },
}

impl Block {
    /// Create a heading block.
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading { text: text.into() }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a list block.
    pub fn list(items: Vec<ListItem>) -> Self {
        Block::List { items }
    }

    /// Create a callout block.
    pub fn callout(kind: CalloutKind, text: impl Into<String>) -> Self {
        Block::Callout {
            kind,
            text: text.into(),
        }
    }

    /// Create an image block.
    pub fn image(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Block::Image {
            url: url.into(),
            caption: caption.into(),
        }
    }

    /// Get the text of text-only blocks (heading, paragraph, callout).
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text } | Block::Paragraph { text } | Block::Callout { text, .. } => {
                Some(text)
            }
            _ => None,
        }
    }

    /// Short name of the block variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::Table(_) => "table",
            Block::Callout { .. } => "callout",
            Block::Image { .. } => "image",
        }
    }
}

/// Kind of a callout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    #[default]
    Note,
    Warning,
    Tip,
}

impl CalloutKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CalloutKind::Note => "Note",
            CalloutKind::Warning => "Warning",
            CalloutKind::Tip => "Tip",
        }
    }

    /// Icon prefix shown before the label.
    pub fn icon(&self) -> &'static str {
        match self {
            CalloutKind::Note => "💡",
            CalloutKind::Warning => "⚠️",
            CalloutKind::Tip => "📝",
        }
    }

    /// Styling hook used by the HTML renderer.
    pub fn css_class(&self) -> &'static str {
        match self {
            CalloutKind::Note => "note",
            CalloutKind::Warning => "warning",
            CalloutKind::Tip => "tip",
        }
    }
}
