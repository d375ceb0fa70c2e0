//! Document-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// The structured result of one extraction pass over one page.
///
/// A document is created once and never modified; accessors hand out
/// shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    title: Option<String>,
    sections: Vec<Section>,
}

impl Document {
    /// Create a document from its title and sections.
    pub fn new(title: Option<String>, sections: Vec<Section>) -> Self {
        Self { title, sections }
    }

    /// Get the document title, if one was resolved.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the sections in reading order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get a section by number (1-indexed).
    pub fn get_section(&self, number: usize) -> Option<&Section> {
        if number == 0 {
            return None;
        }
        self.sections.get(number - 1)
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over every block of every section, in reading order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks().iter())
    }
}

/// A titled group of blocks, one per collapsible region of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    title: String,
    blocks: Vec<Block>,
}

impl Section {
    /// Create a section.
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }

    /// Get the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the blocks in source order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Check if the section has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
