//! # unfold
//!
//! Structured content extraction from web pages whose material lives in
//! collapsible sections.
//!
//! A rendered page is turned into a [`Document`]: an optional title and an
//! ordered list of [`Section`]s, each holding typed [`Block`]s (headings,
//! paragraphs, nested lists, tables, callouts and images). The document can
//! then be rendered to plain text, Markdown, or a standalone HTML page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unfold::{parse_file, OutputFormat};
//!
//! fn main() -> unfold::Result<()> {
//!     // Extract from a saved page
//!     let extraction = parse_file("article.html")?;
//!
//!     // Render as Markdown
//!     match extraction.render(OutputFormat::Markdown) {
//!         Some(markdown) => println!("{}", markdown),
//!         None => eprintln!("No content found"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Live pages
//!
//! Collapsed sections can be expanded before extraction by implementing
//! [`RevealPage`] for a browser session and running [`reveal`] on it. The
//! markup the browser reports afterwards is then passed to [`parse_html`].
//!
//! ## Features
//!
//! - **Title cascades**: several independent strategies per title
//! - **Nested lists**: unbounded depth, also inside table cells
//! - **Three renderers**: text, Markdown and HTML from one model
//! - **JSON**: the model itself serializes with serde
//! - **Observers**: follow every extraction decision without global flags

pub mod error;
pub mod extract;
pub mod filename;
pub mod model;
pub mod render;
pub mod reveal;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    DomExtractor, ExtractObserver, ExtractOptions, Extraction, LogObserver, Markers,
    NoopObserver, RecordingObserver, TextCleaner,
};
pub use filename::{output_filename, slug};
pub use model::{
    Block, CalloutKind, Cell, Document, ExtractionStats, ListItem, Section, Table, TableRow,
};
pub use render::{render, render_as, to_json, JsonFormat, OutputFormat};
pub use reveal::{ElementHandle, RevealChain, RevealOptions, RevealPage, RevealStrategy};

use std::path::Path;

/// Extract a document from page markup with default options.
///
/// # Example
///
/// ```
/// use unfold::{parse_html, Extraction};
///
/// let extraction = parse_html("<html><body><p>No sections here</p></body></html>");
/// assert_eq!(extraction, Extraction::NoSectionsFound);
/// ```
pub fn parse_html(markup: &str) -> Extraction {
    Unfold::new().parse(markup)
}

/// Extract a document from a saved page.
///
/// # Arguments
///
/// * `path` - Path to an HTML file
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    Unfold::new().parse_file(path)
}

/// Extract from a page that may not exist.
///
/// `None` stands for a page that could not be loaded upstream and yields
/// [`Extraction::NoSectionsFound`].
pub fn extract_page(markup: Option<&str>) -> Extraction {
    match markup {
        Some(markup) => parse_html(markup),
        None => Extraction::NoSectionsFound,
    }
}

/// Expand collapsed sections with the default reveal chain.
///
/// Returns whether any strategy reported success. Never fails.
pub fn reveal(page: &mut dyn RevealPage) -> bool {
    RevealChain::default().run(page, &mut LogObserver)
}

/// Configurable extraction entry point.
///
/// # Example
///
/// ```
/// use unfold::Unfold;
///
/// let unfold = Unfold::new()
///     .with_site_origin("https://example.org")
///     .with_title_suffix(" | Example")
///     .with_fallback_title(None);
/// let extraction = unfold.parse("<html></html>");
/// assert!(!extraction.is_found());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unfold {
    options: ExtractOptions,
    reveal: RevealOptions,
}

impl Unfold {
    /// Create with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given extract options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.reveal = RevealOptions::for_markers(&options.markers);
        self.options = options;
        self
    }

    /// Set the origin used for path-absolute image URLs.
    pub fn with_site_origin(mut self, origin: impl Into<String>) -> Self {
        self.options = self.options.with_site_origin(origin);
        self
    }

    /// Set the suffix stripped from the page title.
    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.options = self.options.with_title_suffix(suffix);
        self
    }

    /// Set the title used when none can be found.
    pub fn with_fallback_title(mut self, title: Option<String>) -> Self {
        self.options = self.options.with_fallback_title(title);
        self
    }

    /// Set the structural markers. Reveal selectors follow the markers.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.reveal = RevealOptions::for_markers(&markers);
        self.options = self.options.with_markers(markers);
        self
    }

    /// Set the reveal options.
    pub fn with_reveal_options(mut self, options: RevealOptions) -> Self {
        self.reveal = options;
        self
    }

    /// Get the extract options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Get the reveal options.
    pub fn reveal_options(&self) -> &RevealOptions {
        &self.reveal
    }

    /// Extract from markup.
    pub fn parse(&self, markup: &str) -> Extraction {
        self.parse_observed(markup, &mut NoopObserver)
    }

    /// Extract from markup, reporting decisions to `observer`.
    pub fn parse_observed(&self, markup: &str, observer: &mut dyn ExtractObserver) -> Extraction {
        DomExtractor::new(self.options.clone()).extract_str(markup, observer)
    }

    /// Extract from a saved page.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let markup = std::fs::read_to_string(path)?;
        Ok(self.parse(&markup))
    }

    /// Run the default reveal chain with these options.
    pub fn reveal(&self, page: &mut dyn RevealPage, observer: &mut dyn ExtractObserver) -> bool {
        RevealChain::default()
            .with_options(self.reveal.clone())
            .run(page, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_page_none() {
        assert_eq!(extract_page(None), Extraction::NoSectionsFound);
    }

    #[test]
    fn test_markers_drive_reveal_selectors() {
        let markers = Markers {
            attribute: "data-test".to_string(),
            ..Markers::default()
        };
        let unfold = Unfold::new().with_markers(markers);
        assert_eq!(
            unfold.reveal_options().section_selector,
            r#"[data-test="section-with-header"]"#
        );
    }

    #[test]
    fn test_parse_file_missing() {
        assert!(matches!(
            parse_file("/nonexistent/page.html"),
            Err(Error::Io(_))
        ));
    }
}
