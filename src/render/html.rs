//! Standalone HTML rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::{
    unescape_delimiter, Block, Cell, Document, ListItem, Table, LINE_BREAK, NESTED_INDENT,
};

/// Page title used when the document has none.
const UNTITLED: &str = "Untitled document";

/// Display width of rendered images, in pixels.
const IMAGE_WIDTH: u32 = 400;

/// Embedded stylesheet with print and screen rule sets.
///
/// Nested lists are styled for two tiers (`ul ul`); deeper levels inherit
/// the second tier.
pub const STYLESHEET: &str = r#"        @media print {
            body {
                font-family: 'Times New Roman', serif;
                font-size: 12pt;
                line-height: 1.4;
                margin: 0.5in;
                color: black;
            }
            .section { margin-bottom: 20pt; }
            .section-title {
                font-size: 16pt;
                font-weight: bold;
                margin-top: 24pt;
                margin-bottom: 12pt;
                border-bottom: 2pt solid #333;
                padding-bottom: 6pt;
            }
            h3 { font-size: 14pt; margin-top: 18pt; margin-bottom: 8pt; }
            .callout {
                border: 1pt solid #666;
                padding: 8pt;
                margin: 12pt 0;
                background-color: #f9f9f9;
            }
            .note { border-left: 4pt solid #4CAF50; }
            .warning { border-left: 4pt solid #f44336; }
            .tip { border-left: 4pt solid #2196F3; }
            table { border-collapse: collapse; width: 100%; margin: 12pt 0; }
            th, td {
                border: 1pt solid #333;
                padding: 6pt;
                text-align: left;
                vertical-align: top;
            }
            th { background-color: #f0f0f0; font-weight: bold; }
            .image { margin: 12pt 0; text-align: center; page-break-inside: avoid; }
            .image img { max-width: 100%; height: auto; }
            ul { margin: 8pt 0; padding-left: 20pt; }
            ul ul { margin: 4pt 0; list-style-type: circle; }
            li { margin: 4pt 0; }
            p { margin: 8pt 0; }
        }

        @media screen {
            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                max-width: 800px;
                margin: 0 auto;
                padding: 20px;
                line-height: 1.6;
                background-color: #fff;
            }
            .title-banner {
                text-align: center;
                margin-bottom: 30px;
                border-bottom: 3px solid #007acc;
                padding-bottom: 15px;
            }
            .title-banner h1 { font-size: 28pt; color: #333; margin: 0; }
            .section {
                margin-bottom: 30px;
                padding: 20px;
                border-radius: 8px;
                box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            }
            .section-title {
                font-size: 24px;
                margin-bottom: 15px;
                color: #333;
                border-bottom: 2px solid #007acc;
                padding-bottom: 8px;
            }
            .callout { border-radius: 6px; padding: 15px; margin: 15px 0; }
            .note { background-color: #e8f5e8; border-left: 4px solid #4CAF50; }
            .warning { background-color: #ffeaea; border-left: 4px solid #f44336; }
            .tip { background-color: #e3f2fd; border-left: 4px solid #2196F3; }
            table {
                border-collapse: collapse;
                width: 100%;
                margin: 15px 0;
                box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            }
            th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
            th { background-color: #f8f9fa; font-weight: 600; }
            tr:nth-child(even) { background-color: #f8f9fa; }
            .image { margin: 20px 0; text-align: center; }
            .image img { max-width: 100%; height: auto; }
            .image figcaption { font-style: italic; color: #555; }
            ul ul { list-style-type: circle; }
        }"#;

/// Convert a document to a standalone HTML page.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    let page_title = doc.title().unwrap_or(UNTITLED);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{}</title>\n", encode_text(page_title)));
    out.push_str("    <style>\n");
    out.push_str(STYLESHEET);
    out.push_str("\n    </style>\n</head>\n<body>\n");

    if let Some(title) = doc.title() {
        out.push_str("<div class=\"title-banner\">\n");
        out.push_str(&format!("<h1>{}</h1>\n", encode_text(title)));
        out.push_str("</div>\n");
    }

    for (i, section) in doc.sections().iter().enumerate() {
        out.push_str(&format!("<section class=\"section\" id=\"section-{}\">\n", i + 1));
        out.push_str(&format!(
            "<h2 class=\"section-title\">{}</h2>\n",
            encode_text(section.title())
        ));
        for block in section.blocks() {
            render_block(&mut out, block);
        }
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { text } => out.push_str(&format!("<h3>{}</h3>\n", encode_text(text))),
        Block::Paragraph { text } => out.push_str(&format!("<p>{}</p>\n", encode_text(text))),
        Block::List { items } => render_list(out, items),
        Block::Table(table) => render_table(out, table),
        Block::Callout { kind, text } => {
            out.push_str(&format!(
                "<div class=\"callout {}\">{} <strong>{}:</strong> {}</div>\n",
                kind.css_class(),
                kind.icon(),
                kind.label(),
                encode_text(text)
            ));
        }
        Block::Image { url, caption } => {
            let caption_attr = encode_double_quoted_attribute(caption);
            out.push_str("<figure class=\"image\">\n");
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{caption_attr}\" width=\"{IMAGE_WIDTH}\">\n",
                encode_double_quoted_attribute(url)
            ));
            out.push_str(&format!(
                "<figcaption>{}</figcaption>\n",
                encode_text(caption)
            ));
            out.push_str("</figure>\n");
        }
    }
}

fn render_list(out: &mut String, items: &[ListItem]) {
    out.push_str("<ul>\n");
    for item in items {
        out.push_str("<li>");
        out.push_str(&encode_text(&item.text));
        if item.has_children() {
            out.push('\n');
            render_list(out, &item.children);
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

fn render_table(out: &mut String, table: &Table) {
    out.push_str("<table>\n");
    if table.has_header() {
        out.push_str("<thead>\n<tr>");
        for cell in &table.header {
            out.push_str(&format!("<th>{}</th>", cell_html(cell)));
        }
        out.push_str("</tr>\n</thead>\n");
    }
    out.push_str("<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            out.push_str(&format!("<td>{}</td>", cell_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

/// Cell content as markup.
///
/// The delimiter escapes only matter for row serialization and is dropped
/// here. List cells keep their line breaks and indentation as markup.
fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => encode_text(&unescape_delimiter(text)).into_owned(),
        Cell::List(_) => cell
            .list_lines()
            .into_iter()
            .map(|(nested, line)| {
                let line = encode_text(&unescape_delimiter(line)).into_owned();
                if nested {
                    format!("{NESTED_INDENT}{line}")
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join(LINE_BREAK),
    }
}
