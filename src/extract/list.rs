//! Nested list model builder.

use scraper::{ElementRef, Node};

use super::dom::{element_children, is_tag, raw_text, LIST_TAGS};
use super::TextCleaner;
use crate::model::ListItem;

/// Builds [`ListItem`] trees from `ul`/`ol` nodes.
pub struct ListFormatter<'c> {
    cleaner: &'c TextCleaner,
}

impl<'c> ListFormatter<'c> {
    /// Create a list formatter.
    pub fn new(cleaner: &'c TextCleaner) -> Self {
        Self { cleaner }
    }

    /// Build the items of a list node.
    ///
    /// Items without text are kept only when they carry a nested list.
    pub fn format(&self, list: ElementRef<'_>) -> Vec<ListItem> {
        element_children(list)
            .filter(|child| child.value().name() == "li")
            .filter_map(|li| self.format_item(li))
            .collect()
    }

    fn format_item(&self, li: ElementRef<'_>) -> Option<ListItem> {
        let mut parts = Vec::new();
        let mut nested = None;

        for child in li.children() {
            let text = match child.value() {
                Node::Text(text) => text.to_string(),
                Node::Element(_) => match ElementRef::wrap(child) {
                    Some(el) if is_tag(&el, LIST_TAGS) => {
                        nested = Some(el);
                        break;
                    }
                    Some(el) => raw_text(el),
                    None => continue,
                },
                _ => continue,
            };

            let cleaned = self.cleaner.clean(&text);
            if !cleaned.is_empty() {
                parts.push(cleaned);
            }
        }

        let children = nested.map(|list| self.format(list)).unwrap_or_default();
        let text = parts.join(" ");

        if text.is_empty() && children.is_empty() {
            return None;
        }
        Some(ListItem::with_children(text, children))
    }
}
