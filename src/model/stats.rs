//! Content statistics for an extracted document.

use super::{Block, Cell, Document, ListItem};
use serde::{Deserialize, Serialize};

/// Counts of the content captured by one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of retained sections
    pub section_count: u32,

    /// Number of subsection headings
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of list items, nested ones included
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of callout boxes
    pub callout_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        stats.section_count = doc.section_count() as u32;
        for block in doc.blocks() {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { text } => {
                self.heading_count += 1;
                self.count_text(text);
            }
            Block::Paragraph { text } => {
                self.paragraph_count += 1;
                self.count_text(text);
            }
            Block::List { items } => {
                for (_, item) in ListItem::depth_first(items) {
                    self.list_item_count += 1;
                    self.count_text(&item.text);
                }
            }
            Block::Table(table) => {
                self.table_count += 1;
                let cells = table
                    .header
                    .iter()
                    .chain(table.rows.iter().flat_map(|r| r.cells.iter()));
                for cell in cells {
                    if let Cell::Text(text) = cell {
                        self.count_text(text);
                    } else {
                        for (_, line) in cell.list_lines() {
                            self.count_text(line);
                        }
                    }
                }
            }
            Block::Callout { text, .. } => {
                self.callout_count += 1;
                self.count_text(text);
            }
            Block::Image { .. } => self.image_count += 1,
        }
    }

    /// Add word counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.section_count += other.section_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.callout_count += other.callout_count;
        self.image_count += other.image_count;
        self.word_count += other.word_count;
    }
}
