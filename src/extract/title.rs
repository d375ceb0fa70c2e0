//! Title resolution strategies.
//!
//! Document and section titles are resolved by trying an ordered list of
//! independent strategies; the first non-empty result wins.

use scraper::ElementRef;

use super::dom::{
    attr, class_contains_ignore_case, descendant_elements, find_descendant, has_marker, is_tag,
    raw_text, select_first, HEADING_TAGS,
};
use super::ExtractOptions;

/// Upper bound (exclusive) on the length of a control's text used as a title.
const MAX_TITLE_LEN: usize = 100;

/// Lower bound (exclusive) for titles taken from header-classed elements.
const MIN_CLASSED_TITLE_LEN: usize = 5;

/// Number of div/span descendants inspected by [`HeaderClassText`].
const CLASSED_SCAN_LIMIT: usize = 10;

/// One way of finding a title within a scope node.
pub trait TitleStrategy: Sync {
    /// Stable strategy name, reported to observers.
    fn name(&self) -> &'static str;

    /// Try to resolve a cleaned, non-empty title.
    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String>;
}

/// Strategies for the document title, in priority order.
///
/// The configured fallback title is applied by the caller.
pub static DOCUMENT_TITLE_STRATEGIES: &[&dyn TitleStrategy] =
    &[&DeclaredTitle, &ArticleHeaderTitle, &FirstTopLevelHeading];

/// Strategies for section titles, in priority order.
pub static SECTION_TITLE_STRATEGIES: &[&dyn TitleStrategy] = &[
    &HeaderMarkerHeading,
    &HeaderClassHeading,
    &AnyHeading,
    &LabelledControl,
    &HeaderClassText,
];

/// Run strategies in order and return the first success with its name.
pub fn resolve_title(
    strategies: &[&dyn TitleStrategy],
    scope: ElementRef<'_>,
    options: &ExtractOptions,
) -> Option<(&'static str, String)> {
    strategies.iter().find_map(|strategy| {
        strategy
            .resolve(scope, options)
            .filter(|title| !title.is_empty())
            .map(|title| (strategy.name(), title))
    })
}

fn clean(options: &ExtractOptions, element: ElementRef<'_>) -> Option<String> {
    Some(options.cleaner.clean(&raw_text(element))).filter(|t| !t.is_empty())
}

/// First heading inside `scope`, preferring `h3`.
fn heading_title(scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
    let heading = select_first(scope, "h3")
        .or_else(|| find_descendant(scope, |el| is_tag(&el, HEADING_TAGS)))?;
    clean(options, heading)
}

/// `<title>` with the site suffix removed.
pub struct DeclaredTitle;

impl TitleStrategy for DeclaredTitle {
    fn name(&self) -> &'static str {
        "declared-title"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        let title = select_first(scope, "title")?;
        let text = raw_text(title);
        let mut text = text.trim_end();
        // Only a trailing suffix is removed.
        if let Some(suffix) = options.title_suffix.as_deref().filter(|s| !s.is_empty()) {
            text = text.strip_suffix(suffix).unwrap_or(text);
        }
        Some(options.cleaner.clean(text))
    }
}

/// Heading or title-classed element inside the article header marker.
pub struct ArticleHeaderTitle;

impl TitleStrategy for ArticleHeaderTitle {
    fn name(&self) -> &'static str {
        "article-header"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        let markers = &options.markers;
        let header = select_first(scope, &markers.selector(&markers.article_header))?;
        let element = select_first(header, "h1")
            .or_else(|| select_first(header, "h2"))
            .or_else(|| find_descendant(header, |el| class_contains_ignore_case(&el, "title")))?;
        clean(options, element)
    }
}

/// First `h1` anywhere in the document.
pub struct FirstTopLevelHeading;

impl TitleStrategy for FirstTopLevelHeading {
    fn name(&self) -> &'static str {
        "first-h1"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        clean(options, select_first(scope, "h1")?)
    }
}

/// Heading inside the section's header marker node.
pub struct HeaderMarkerHeading;

impl TitleStrategy for HeaderMarkerHeading {
    fn name(&self) -> &'static str {
        "header-marker"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        let markers = &options.markers;
        let header = find_descendant(scope, |el| {
            el.value().name() == "div"
                && has_marker(&el, &markers.attribute, &markers.section_header)
        })?;
        heading_title(header, options)
    }
}

/// Heading inside the first header-classed `div`.
pub struct HeaderClassHeading;

impl TitleStrategy for HeaderClassHeading {
    fn name(&self) -> &'static str {
        "header-class"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        let header = find_descendant(scope, |el| {
            el.value().name() == "div" && class_contains_ignore_case(&el, "header")
        })?;
        heading_title(header, options)
    }
}

/// Any heading in the section.
pub struct AnyHeading;

impl TitleStrategy for AnyHeading {
    fn name(&self) -> &'static str {
        "any-heading"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        heading_title(scope, options)
    }
}

/// Text of a header/title/button-classed control.
pub struct LabelledControl;

impl TitleStrategy for LabelledControl {
    fn name(&self) -> &'static str {
        "labelled-control"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        descendant_elements(scope)
            .filter(|el| is_tag(el, &["button", "div"]))
            .filter(|el| {
                ["header", "title", "button"]
                    .iter()
                    .any(|k| class_contains_ignore_case(el, k))
            })
            .filter_map(|el| clean(options, el))
            .find(|text| text.chars().count() < MAX_TITLE_LEN)
    }
}

/// Text of a header/title-classed element among the first few div/span nodes.
pub struct HeaderClassText;

impl TitleStrategy for HeaderClassText {
    fn name(&self) -> &'static str {
        "header-class-text"
    }

    fn resolve(&self, scope: ElementRef<'_>, options: &ExtractOptions) -> Option<String> {
        descendant_elements(scope)
            .filter(|el| is_tag(el, &["div", "span"]))
            .take(CLASSED_SCAN_LIMIT)
            .filter(|el| attr(el, "class").is_some())
            .filter(|el| {
                class_contains_ignore_case(el, "header") || class_contains_ignore_case(el, "title")
            })
            .filter_map(|el| clean(options, el))
            .find(|text| {
                let len = text.chars().count();
                len > MIN_CLASSED_TITLE_LEN && len < MAX_TITLE_LEN
            })
    }
}
