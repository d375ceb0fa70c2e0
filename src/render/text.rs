//! Plain text rendering.

use crate::model::Document;

use super::lines::block_lines;

/// Convert a document to plain text.
pub fn to_text(doc: &Document) -> String {
    let mut output: Vec<String> = Vec::new();

    if let Some(title) = doc.title() {
        output.push(format!("# {title}"));
        output.push(String::new());
    }

    for (i, section) in doc.sections().iter().enumerate() {
        output.push(format!("=== Section {}: {} ===", i + 1, section.title()));
        output.extend(section.blocks().iter().flat_map(block_lines));
        output.push(String::new());
    }

    output.join("\n")
}
