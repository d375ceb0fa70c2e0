//! Markdown rendering.

use crate::model::Document;

use super::lines::block_lines;

/// Convert a document to Markdown.
///
/// Block forms are the same as in plain text; only the section heading
/// decoration differs.
pub fn to_markdown(doc: &Document) -> String {
    let mut output: Vec<String> = Vec::new();

    if let Some(title) = doc.title() {
        output.push(format!("# {title}"));
        output.push(String::new());
    }

    for section in doc.sections() {
        output.push(format!("## {}", section.title()));
        output.push(String::new());
        output.extend(section.blocks().iter().flat_map(block_lines));
        output.push(String::new());
    }

    output.join("\n")
}
