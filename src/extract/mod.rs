//! Extraction of a [`Document`] from a rendered page.

mod blocks;
mod cleanup;
pub mod dom;
mod list;
mod observer;
mod options;
mod table;
pub mod title;

pub use blocks::{resolve_image_url, ContentBlockBuilder};
pub use cleanup::{clean_text, TextCleaner, DEFAULT_UI_CHROME};
pub use list::ListFormatter;
pub use observer::{
    ExtractObserver, LogObserver, NoopObserver, ObserverEvent, RecordingObserver, SkipReason,
};
pub use options::{ExtractOptions, Markers};
pub use table::{bullet_lines, escape_delimiter, TableFormatter};
pub use title::{TitleStrategy, DOCUMENT_TITLE_STRATEGIES, SECTION_TITLE_STRATEGIES};

use scraper::{ElementRef, Html};

use crate::model::{Document, Section};
use crate::render::{self, OutputFormat};
use dom::{find_descendant, select_all, select_first};
use title::resolve_title;

/// Outcome of an extraction.
///
/// A page without any usable section is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one section was retained
    Document(Document),
    /// No page, or no section survived
    NoSectionsFound,
}

impl Extraction {
    /// Check if a document was produced.
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Document(_))
    }

    /// Get the document, if any.
    pub fn document(&self) -> Option<&Document> {
        match self {
            Extraction::Document(doc) => Some(doc),
            Extraction::NoSectionsFound => None,
        }
    }

    /// Take the document, if any.
    pub fn into_document(self) -> Option<Document> {
        match self {
            Extraction::Document(doc) => Some(doc),
            Extraction::NoSectionsFound => None,
        }
    }

    /// Render the document, or `None` when nothing was found.
    pub fn render(&self, format: OutputFormat) -> Option<String> {
        self.document().map(|doc| render::render(doc, format))
    }
}

impl From<Extraction> for Option<Document> {
    fn from(extraction: Extraction) -> Self {
        extraction.into_document()
    }
}

/// Walks the section nodes of a page and assembles a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct DomExtractor {
    options: ExtractOptions,
}

impl DomExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Parse markup and extract from it.
    pub fn extract_str(&self, markup: &str, observer: &mut dyn ExtractObserver) -> Extraction {
        let html = Html::parse_document(markup);
        self.extract(&html, observer)
    }

    /// Extract from a parsed page.
    pub fn extract(&self, html: &Html, observer: &mut dyn ExtractObserver) -> Extraction {
        let root = html.root_element();
        let markers = &self.options.markers;

        let section_nodes = select_all(root, &markers.section_selector());
        if section_nodes.is_empty() {
            log::debug!("No section nodes found");
            return Extraction::NoSectionsFound;
        }

        let title = self.document_title(root, observer);
        let builder = ContentBlockBuilder::new(&self.options);

        let mut sections = Vec::new();
        for (index, node) in section_nodes.into_iter().enumerate() {
            let section_title = self.section_title(index, node, observer);

            if self.options.is_excluded(&section_title) {
                observer.on_section_skipped(index, &section_title, SkipReason::Excluded);
                continue;
            }

            let Some(container) = self.content_container(node) else {
                observer.on_section_skipped(index, &section_title, SkipReason::NoContainer);
                continue;
            };

            let blocks = builder.build_all(container, observer);
            if blocks.is_empty() {
                observer.on_section_skipped(index, &section_title, SkipReason::NoBlocks);
                continue;
            }

            observer.on_section_extracted(index, &section_title, blocks.len());
            sections.push(Section::new(section_title, blocks));
        }

        if sections.is_empty() {
            return Extraction::NoSectionsFound;
        }
        Extraction::Document(Document::new(title, sections))
    }

    fn document_title(
        &self,
        root: ElementRef<'_>,
        observer: &mut dyn ExtractObserver,
    ) -> Option<String> {
        match resolve_title(DOCUMENT_TITLE_STRATEGIES, root, &self.options) {
            Some((strategy, title)) => {
                observer.on_document_title(strategy, &title);
                Some(title)
            }
            None => {
                let fallback = self.options.fallback_title.clone()?;
                observer.on_document_title("fallback", &fallback);
                Some(fallback)
            }
        }
    }

    fn section_title(
        &self,
        index: usize,
        node: ElementRef<'_>,
        observer: &mut dyn ExtractObserver,
    ) -> String {
        match resolve_title(SECTION_TITLE_STRATEGIES, node, &self.options) {
            Some((strategy, title)) => {
                observer.on_section_title(index, Some(strategy), &title);
                title
            }
            None => {
                let title = format!("Section {}", index + 1);
                observer.on_section_title(index, None, &title);
                title
            }
        }
    }

    /// Expanded container, else collapsed one, narrowed to the style wrapper.
    fn content_container<'a>(&self, section: ElementRef<'a>) -> Option<ElementRef<'a>> {
        let markers = &self.options.markers;
        let container = select_first(section, &markers.content_shown_selector())
            .or_else(|| select_first(section, &markers.selector(&markers.content_hidden)))?;

        let base_class = markers.base_styles_class.as_str();
        let base = find_descendant(container, |el| {
            el.value().name() == "div" && el.value().classes().any(|c| c.contains(base_class))
        });
        Some(base.unwrap_or(container))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn section(title: &str, body: &str) -> String {
        format!(
            r#"<div data-e2e-test-id="section-with-header">
                 <div data-e2e-test-id="particle-header"><h3>{title}</h3></div>
                 <div data-e2e-test-id="section-content-is-shown"><div class="baseStyles_x">{body}</div></div>
               </div>"#
        )
    }

    fn page(sections: &[String]) -> String {
        format!(
            "<html><head><title>Anemia - AMBOSS</title></head><body>{}</body></html>",
            sections.concat()
        )
    }

    #[test]
    fn test_extracts_sections_in_order() {
        let html = page(&[
            section("Summary", "<p>Anemia is a reduction in hemoglobin.</p>"),
            section("Etiology", "<ul><li>Blood loss</li></ul>"),
        ]);
        let extraction = DomExtractor::default().extract_str(&html, &mut NoopObserver);
        let doc = extraction.document().unwrap();

        assert_eq!(doc.title(), Some("Anemia"));
        let titles: Vec<_> = doc.sections().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["Summary", "Etiology"]);
    }

    #[test]
    fn test_references_section_skipped() {
        let html = page(&[
            section("Summary", "<p>Kept paragraph.</p>"),
            section("References", "<p>Smith et al.</p>"),
        ]);
        let mut observer = RecordingObserver::new();
        let extraction = DomExtractor::default().extract_str(&html, &mut observer);

        assert_eq!(extraction.document().unwrap().section_count(), 1);
        assert_eq!(
            observer.skipped_sections(),
            vec![("References", SkipReason::Excluded)]
        );
    }

    #[test]
    fn test_hidden_container_used_when_no_shown_container() {
        let html = page(&[r#"<div data-e2e-test-id="section-with-header"><h3>Therapy</h3>
               <div data-e2e-test-id="section-content-is-hidden"><p>Iron supplementation.</p></div>
             </div>"#
            .to_string()]);
        let doc = DomExtractor::default()
            .extract_str(&html, &mut NoopObserver)
            .into_document()
            .unwrap();
        assert_eq!(
            doc.sections()[0].blocks(),
            &[Block::paragraph("Iron supplementation.")]
        );
    }

    #[test]
    fn test_section_without_container_dropped() {
        let html = page(&[
            r#"<div data-e2e-test-id="section-with-header"><h3>Empty</h3></div>"#.to_string(),
            section("Kept", "<p>Body text.</p>"),
        ]);
        let mut observer = RecordingObserver::new();
        let extraction = DomExtractor::default().extract_str(&html, &mut observer);

        assert_eq!(extraction.document().unwrap().sections()[0].title(), "Kept");
        assert_eq!(
            observer.skipped_sections(),
            vec![("Empty", SkipReason::NoContainer)]
        );
    }

    #[test]
    fn test_placeholder_section_title_uses_position() {
        let html = page(&[
            section("First", "<p>One.</p>"),
            r#"<div data-e2e-test-id="section-with-header">
                 <div data-e2e-test-id="section-content-is-shown"><p>Two.</p></div></div>"#
                .to_string(),
        ]);
        let doc = DomExtractor::default()
            .extract_str(&html, &mut NoopObserver)
            .into_document()
            .unwrap();
        assert_eq!(doc.sections()[1].title(), "Section 2");
    }

    #[test]
    fn test_no_sections() {
        let extraction =
            DomExtractor::default().extract_str("<html><body><p>x</p></body></html>", &mut NoopObserver);
        assert_eq!(extraction, Extraction::NoSectionsFound);
        assert!(extraction.render(OutputFormat::Text).is_none());
    }

    #[test]
    fn test_all_sections_empty() {
        let html = page(&[section("Summary", "<p> </p>")]);
        let extraction = DomExtractor::default().extract_str(&html, &mut NoopObserver);
        assert!(!extraction.is_found());
    }

    #[test]
    fn test_fallback_title() {
        let html = format!("<html><body>{}</body></html>", section("Summary", "<p>Body.</p>"));
        let extractor = DomExtractor::default();
        let doc = extractor.extract_str(&html, &mut NoopObserver).into_document().unwrap();
        assert_eq!(doc.title(), Some("Medical Content"));

        let extractor = DomExtractor::new(ExtractOptions::default().with_fallback_title(None));
        let doc = extractor.extract_str(&html, &mut NoopObserver).into_document().unwrap();
        assert_eq!(doc.title(), None);
    }
}
