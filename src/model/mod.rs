//! Document model types for extracted page content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! DOM extraction and rendering. Values are built once by the extraction
//! pipeline and only read afterwards.

mod block;
mod document;
mod list;
mod stats;
mod table;

pub use block::{Block, CalloutKind};
pub use document::{Document, Section};
pub use list::ListItem;
pub use stats::ExtractionStats;
pub use table::{
    unescape_delimiter, Cell, Table, TableRow, BULLET, LINE_BREAK, NESTED_BULLET, NESTED_INDENT,
};
