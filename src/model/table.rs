//! Table types.

use serde::{Deserialize, Serialize};

/// Line-break marker joining the lines of a list-derived cell.
pub const LINE_BREAK: &str = "<br/>";

/// Bullet glyph for top-level items in a list-derived cell.
pub const BULLET: &str = "•";

/// Bullet glyph for nested items in a list-derived cell.
pub const NESTED_BULLET: &str = "◦";

/// Indentation marker placed before nested items in a list-derived cell.
pub const NESTED_INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// A table with an optional header row and ordered body rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Header cells (empty = no header row)
    pub header: Vec<Cell>,

    /// Body rows
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from header cells and body rows.
    pub fn with_rows(header: Vec<Cell>, rows: Vec<TableRow>) -> Self {
        Self { header, rows }
    }

    /// Check if the table has a header row.
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (header first, then first body row).
    pub fn column_count(&self) -> usize {
        if self.has_header() {
            return self.header.len();
        }
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table has neither header nor body rows.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

/// Undo the delimiter escaping applied to stored cell text.
///
/// `\\` becomes `\` and `\|` becomes `|`; any other backslash is kept.
pub fn unescape_delimiter(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('\\' | '|')) => out.push(next),
            Some(next) => {
                out.push(c);
                out.push(next);
            }
            None => out.push(c),
        }
    }
    out
}

/// A table body row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<Cell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// A table cell.
///
/// Both variants store text with the column delimiter already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Cell {
    /// Plain cleaned text
    Text(String),

    /// Bullet lines joined by [`LINE_BREAK`]
    List(String),
}

impl Cell {
    /// Get the stored cell string.
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::List(s) => s,
        }
    }

    /// Check if the cell was derived from a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Cell::List(_))
    }

    /// Split a list-derived cell into `(nested, line)` pairs.
    ///
    /// The line keeps its bullet glyph; the indentation marker is removed and
    /// reported through the `nested` flag. Text cells yield a single entry.
    pub fn list_lines(&self) -> Vec<(bool, &str)> {
        match self {
            Cell::Text(s) => vec![(false, s.as_str())],
            Cell::List(s) => s
                .split(LINE_BREAK)
                .map(|line| match line.strip_prefix(NESTED_INDENT) {
                    Some(rest) => (true, rest),
                    None => (false, line),
                })
                .collect(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Text(String::new())
    }
}
