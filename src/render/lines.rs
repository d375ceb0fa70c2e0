//! Line forms of blocks shared by the text and Markdown renderers.

use crate::model::{Block, Cell, ListItem, Table};

/// Render one block as output lines.
pub fn block_lines(block: &Block) -> Vec<String> {
    match block {
        Block::Heading { text } | Block::Paragraph { text } => vec![text.clone()],
        Block::List { items } => {
            let mut lines = Vec::new();
            list_lines(items, &mut lines);
            lines
        }
        Block::Table(table) => table_lines(table),
        Block::Callout { kind, text } => {
            vec![format!("{} **{}:** {text}", kind.icon(), kind.label())]
        }
        Block::Image { url, caption } => vec![format!("[Image: {caption}] {url}")],
    }
}

fn list_lines(items: &[ListItem], lines: &mut Vec<String>) {
    lines.push("<ul>".to_string());
    for item in items {
        if item.text.is_empty() {
            lines.push("<li>".to_string());
        } else {
            lines.push(format!("<li>{}", item.text));
        }
        if item.has_children() {
            list_lines(&item.children, lines);
        }
        lines.push("</li>".to_string());
    }
    lines.push("</ul>".to_string());
}

fn table_lines(table: &Table) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    if table.has_header() {
        lines.push(table_row(&table.header));
        lines.push(format!("| {} |", vec!["---"; table.header.len()].join(" | ")));
    }
    for row in &table.rows {
        lines.push(table_row(&row.cells));
    }
    lines
}

/// Render cells as a `| a | b |` row. Cell text is already escaped.
pub fn table_row(cells: &[Cell]) -> String {
    let cells: Vec<&str> = cells.iter().map(Cell::as_str).collect();
    format!("| {} |", cells.join(" | "))
}

/// Split a rendered row on unescaped delimiters.
///
/// Returns the trimmed cell strings with their escapes intact, so the
/// result has exactly one entry per rendered cell.
pub fn split_row(row: &str) -> Vec<String> {
    let row = row.trim();
    let inner = row.strip_prefix('|').unwrap_or(row);
    let inner = match inner.strip_suffix('|') {
        Some(stripped) if !stripped.ends_with('\\') => stripped,
        _ => inner,
    };

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '|' => cells.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());
    cells
}
