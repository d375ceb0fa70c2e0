//! Classification of content nodes into blocks.

use scraper::ElementRef;
use url::Url;

use super::dom::{
    attr, descendant_elements, has_class, is_tag, raw_text, select_all, select_first,
    HEADING_TAGS, LIST_TAGS,
};
use super::{ExtractObserver, ExtractOptions, ListFormatter, TableFormatter};
use crate::model::{Block, CalloutKind};

const CALLOUT_CLASSES: &[&str] = &["merke", "cave", "content-box"];
const CONTAINER_TAGS: &[&str] = &["ul", "ol", "table", "div"];

/// Turns direct children of a content container into [`Block`]s.
pub struct ContentBlockBuilder<'o> {
    options: &'o ExtractOptions,
}

impl<'o> ContentBlockBuilder<'o> {
    /// Create a block builder.
    pub fn new(options: &'o ExtractOptions) -> Self {
        Self { options }
    }

    /// Build the blocks of every direct element child of `container`, in order.
    pub fn build_all(
        &self,
        container: ElementRef<'_>,
        observer: &mut dyn ExtractObserver,
    ) -> Vec<Block> {
        let mut blocks = Vec::new();
        for child in container.children().filter_map(ElementRef::wrap) {
            for block in self.build(child) {
                observer.on_block(&block);
                blocks.push(block);
            }
        }
        blocks
    }

    /// Classify one node. Returns zero or more blocks.
    ///
    /// Only paragraph containers holding several images produce more than one.
    pub fn build(&self, node: ElementRef<'_>) -> Vec<Block> {
        let name = node.value().name();

        if is_tag(&node, HEADING_TAGS) {
            return self.text_block(node).map(Block::heading).into_iter().collect();
        }

        if name == "div" && has_class(&node, "table-wrapper") {
            return select_first(node, "table")
                .and_then(|table| TableFormatter::new(&self.options.cleaner).format(table))
                .map(Block::Table)
                .into_iter()
                .collect();
        }

        if is_tag(&node, LIST_TAGS) {
            let items = ListFormatter::new(&self.options.cleaner).format(node);
            if items.is_empty() {
                return Vec::new();
            }
            return vec![Block::list(items)];
        }

        if name == "div" && has_class(&node, "paragraph") {
            let markers = select_all(node, "span.thumbnail__image");
            if markers.is_empty() {
                return self.text_block(node).map(Block::paragraph).into_iter().collect();
            }
            return markers.into_iter().filter_map(|m| self.image(m)).collect();
        }

        if name == "div" && CALLOUT_CLASSES.iter().any(|c| has_class(&node, c)) {
            return self
                .text_block(node)
                .map(|text| Block::callout(callout_kind(node), text))
                .into_iter()
                .collect();
        }

        if name == "p" {
            return self.text_block(node).map(Block::paragraph).into_iter().collect();
        }

        self.generic(node).into_iter().collect()
    }

    fn text_block(&self, node: ElementRef<'_>) -> Option<String> {
        Some(self.options.cleaner.clean(&raw_text(node))).filter(|t| !t.is_empty())
    }

    /// Fallback for unclassified nodes.
    fn generic(&self, node: ElementRef<'_>) -> Option<Block> {
        if descendant_elements(node).any(|el| is_tag(&el, CONTAINER_TAGS)) {
            return None;
        }
        let text = self.text_block(node)?;
        if text.chars().count() > self.options.min_generic_text_len {
            Some(Block::paragraph(text))
        } else {
            None
        }
    }

    /// Build an image block from a thumbnail marker.
    fn image(&self, marker: ElementRef<'_>) -> Option<Block> {
        let img = select_first(marker, "img")?;
        let src = attr(&img, "src").map(str::trim).filter(|s| !s.is_empty())?;
        let url = resolve_image_url(src, &self.options.site_origin);

        let caption = attr(&img, "title")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| {
                select_first(marker, "span.thumbnail__image__title")
                    .map(|span| self.options.cleaner.clean(&raw_text(span)))
                    .filter(|t| !t.is_empty())
            })
            .unwrap_or_else(|| self.options.image_caption_placeholder.clone());

        Some(Block::image(url, caption))
    }
}

/// Callout kind from the node's classes. Unknown colors default to a note.
fn callout_kind(node: ElementRef<'_>) -> CalloutKind {
    if has_class(&node, "merke") || has_class(&node, "green") {
        CalloutKind::Note
    } else if has_class(&node, "cave") || has_class(&node, "red") {
        CalloutKind::Warning
    } else if has_class(&node, "blue") {
        CalloutKind::Tip
    } else {
        CalloutKind::Note
    }
}

/// Make an image source absolute.
///
/// Protocol-relative sources get `https:`, path-absolute sources get the
/// site origin. Absolute URLs are kept; anything else is joined onto the
/// origin, or kept verbatim if that fails.
pub fn resolve_image_url(src: &str, origin: &str) -> String {
    if let Some(rest) = src.strip_prefix("//") {
        return format!("https://{rest}");
    }
    if src.starts_with('/') {
        return format!("{origin}{src}");
    }
    if Url::parse(src).is_ok() {
        return src.to_string();
    }

    match Url::parse(&format!("{origin}/")).and_then(|base| base.join(src)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::debug!("Keeping unresolvable image source {src:?}: {e}");
            src.to_string()
        }
    }
}
