//! Small query helpers over the parsed DOM.
//!
//! Selectors built from configuration may fail to parse; such queries
//! match nothing instead of failing the extraction.

use scraper::{ElementRef, Selector};

/// Tag names treated as headings.
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Tag names treated as lists.
pub const LIST_TAGS: &[&str] = &["ul", "ol"];

/// Parse a selector, logging and discarding invalid ones.
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::debug!("Ignoring invalid selector {css:?}: {e}");
            None
        }
    }
}

/// First descendant of `scope` matching `css`.
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = selector(css)?;
    scope.select(&selector).next()
}

/// All descendants of `scope` matching `css`, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(selector) => scope.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Descendant elements of `scope` (excluding `scope`) in document order.
pub fn descendant_elements<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// First descendant element satisfying `predicate`.
pub fn find_descendant<'a, F>(scope: ElementRef<'a>, predicate: F) -> Option<ElementRef<'a>>
where
    F: Fn(ElementRef<'a>) -> bool,
{
    descendant_elements(scope).find(|el| predicate(*el))
}

/// Direct element children of `element`.
pub fn element_children<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Lowercase tag name.
pub fn tag_name<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Check if the element has one of the given tag names.
pub fn is_tag(element: &ElementRef<'_>, names: &[&str]) -> bool {
    names.contains(&tag_name(element))
}

/// Check if the element carries the exact class `name`.
pub fn has_class(element: &ElementRef<'_>, name: &str) -> bool {
    element.value().classes().any(|c| c == name)
}

/// Check if any class of the element contains `needle`.
pub fn class_contains(element: &ElementRef<'_>, needle: &str) -> bool {
    element.value().classes().any(|c| c.contains(needle))
}

/// Check if any class of the element contains `needle`, ignoring ASCII case.
pub fn class_contains_ignore_case(element: &ElementRef<'_>, needle: &str) -> bool {
    let needle = needle.to_ascii_lowercase();
    element
        .value()
        .classes()
        .any(|c| c.to_ascii_lowercase().contains(&needle))
}

/// Attribute lookup.
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Check if the element's marker attribute equals `value`.
pub fn has_marker(element: &ElementRef<'_>, attribute: &str, value: &str) -> bool {
    attr(element, attribute) == Some(value)
}

/// Concatenated text of the element and its descendants, without separators.
pub fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
