//! Nested list types.

use serde::{Deserialize, Serialize};

/// A list item with its own text and any nested items.
///
/// Nesting depth is unbounded. An item may have empty text when it only
/// exists to carry a nested list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItem {
    /// Item text (may be empty)
    pub text: String,

    /// Nested items in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ListItem>,
}

impl ListItem {
    /// Create a leaf item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create an item with nested children.
    pub fn with_children(text: impl Into<String>, children: Vec<ListItem>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }

    /// Check if the item has nested children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Flatten a list depth-first into `(depth, item)` pairs.
    pub fn depth_first(items: &[ListItem]) -> Vec<(usize, &ListItem)> {
        fn walk<'a>(items: &'a [ListItem], depth: usize, out: &mut Vec<(usize, &'a ListItem)>) {
            for item in items {
                out.push((depth, item));
                walk(&item.children, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        walk(items, 0, &mut out);
        out
    }
}
