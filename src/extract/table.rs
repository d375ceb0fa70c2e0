//! Table grid builder.

use scraper::ElementRef;

use super::dom::{element_children, is_tag, raw_text, select_first, LIST_TAGS};
use super::{ListFormatter, TextCleaner};
use crate::model::{
    Cell, ListItem, Table, TableRow, BULLET, LINE_BREAK, NESTED_BULLET, NESTED_INDENT,
};

const CELL_TAGS: &[&str] = &["td", "th"];

/// Escape the column delimiter inside cell text.
///
/// Backslashes are escaped first so a source `\|` cannot turn into an
/// escaped backslash followed by a bare delimiter.
pub fn escape_delimiter(text: &str) -> String {
    text.replace('\\', "\\\\").replace('|', "\\|")
}

/// Builds [`Table`] values from `table` nodes.
pub struct TableFormatter<'c> {
    cleaner: &'c TextCleaner,
}

impl<'c> TableFormatter<'c> {
    /// Create a table formatter.
    pub fn new(cleaner: &'c TextCleaner) -> Self {
        Self { cleaner }
    }

    /// Build a table, or `None` when it has neither header nor body rows.
    pub fn format(&self, table: ElementRef<'_>) -> Option<Table> {
        let header = self.header_cells(table);

        let rows: Vec<TableRow> = body_rows(table)
            .into_iter()
            .map(|tr| {
                element_children(tr)
                    .filter(|c| is_tag(c, CELL_TAGS))
                    .map(|td| self.body_cell(td))
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .map(TableRow::new)
            .collect();

        let table = Table::with_rows(header, rows);
        if table.is_empty() {
            return None;
        }
        Some(table)
    }

    fn header_cells(&self, table: ElementRef<'_>) -> Vec<Cell> {
        let Some(header_row) = select_first(table, "thead tr") else {
            return Vec::new();
        };

        element_children(header_row)
            .filter(|c| is_tag(c, CELL_TAGS))
            .map(|th| {
                let text = self.cleaner.clean(&raw_text(th));
                if text.is_empty() {
                    Cell::Text(" ".to_string())
                } else {
                    Cell::Text(escape_delimiter(&text))
                }
            })
            .collect()
    }

    fn body_cell(&self, td: ElementRef<'_>) -> Cell {
        let lists: Vec<_> = element_children(td)
            .filter(|c| is_tag(c, LIST_TAGS))
            .collect();

        if lists.is_empty() {
            let text = self.cleaner.clean(&raw_text(td)).replace('\n', " ");
            return Cell::Text(escape_delimiter(&text));
        }

        let formatter = ListFormatter::new(self.cleaner);
        let items: Vec<ListItem> = lists.into_iter().flat_map(|l| formatter.format(l)).collect();
        Cell::List(escape_delimiter(&bullet_lines(&items).join(LINE_BREAK)))
    }
}

/// Flatten list items into bullet lines for a single table cell.
///
/// Top-level items get [`BULLET`]; every deeper item gets [`NESTED_INDENT`]
/// and [`NESTED_BULLET`]. Items without text produce no line.
pub fn bullet_lines(items: &[ListItem]) -> Vec<String> {
    ListItem::depth_first(items)
        .into_iter()
        .filter(|(_, item)| !item.text.is_empty())
        .map(|(depth, item)| {
            if depth == 0 {
                format!("{BULLET} {}", item.text)
            } else {
                format!("{NESTED_INDENT}{NESTED_BULLET} {}", item.text)
            }
        })
        .collect()
}

/// Rows that belong to `table` itself and sit outside its `thead`.
fn body_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    super::dom::descendant_elements(table)
        .filter(|el| el.value().name() == "tr")
        .filter(|tr| {
            for ancestor in tr.ancestors().filter_map(ElementRef::wrap) {
                match ancestor.value().name() {
                    "thead" => return false,
                    "table" => return ancestor.id() == table.id(),
                    _ => {}
                }
            }
            false
        })
        .collect()
}
