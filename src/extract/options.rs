//! Extraction options and configuration.

use super::TextCleaner;

/// Marker values that identify the structural parts of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Attribute carrying the test-id markers
    pub attribute: String,

    /// Marker on each collapsible section node
    pub section: String,

    /// Marker on a section's header sub-node
    pub section_header: String,

    /// Marker on an expanded content container
    pub content_shown: String,

    /// Marker on a collapsed content container
    pub content_hidden: String,

    /// Marker on the article header
    pub article_header: String,

    /// Class fragment of the presentation-only wrapper inside a container
    pub base_styles_class: String,
}

impl Markers {
    /// CSS selector matching nodes whose marker attribute equals `value`.
    pub fn selector(&self, value: &str) -> String {
        format!("[{}=\"{}\"]", self.attribute, value)
    }

    /// Selector for section nodes.
    pub fn section_selector(&self) -> String {
        self.selector(&self.section)
    }

    /// Selector for expanded content containers.
    pub fn content_shown_selector(&self) -> String {
        self.selector(&self.content_shown)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            attribute: "data-e2e-test-id".to_string(),
            section: "section-with-header".to_string(),
            section_header: "particle-header".to_string(),
            content_shown: "section-content-is-shown".to_string(),
            content_hidden: "section-content-is-hidden".to_string(),
            article_header: "articleHeader".to_string(),
            base_styles_class: "baseStyles".to_string(),
        }
    }
}

/// Options for extracting a document from a page.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Structural markers
    pub markers: Markers,

    /// Origin prepended to path-absolute image URLs
    pub site_origin: String,

    /// Suffix stripped from the declared page title
    pub title_suffix: Option<String>,

    /// Title used when no other title source succeeds (None = leave untitled)
    pub fallback_title: Option<String>,

    /// Caption used for images without a title
    pub image_caption_placeholder: String,

    /// Sections whose title contains this keyword are skipped
    pub excluded_section_keyword: String,

    /// Minimum length for text picked up from unclassified nodes
    pub min_generic_text_len: usize,

    /// Text cleaner
    pub cleaner: TextCleaner,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the markers.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Set the site origin.
    pub fn with_site_origin(mut self, origin: impl Into<String>) -> Self {
        self.site_origin = origin.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the title suffix to strip.
    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = Some(suffix.into());
        self
    }

    /// Keep the declared title as is.
    pub fn without_title_suffix(mut self) -> Self {
        self.title_suffix = None;
        self
    }

    /// Set the fallback title.
    pub fn with_fallback_title(mut self, title: Option<String>) -> Self {
        self.fallback_title = title;
        self
    }

    /// Set the image caption placeholder.
    pub fn with_caption_placeholder(mut self, caption: impl Into<String>) -> Self {
        self.image_caption_placeholder = caption.into();
        self
    }

    /// Set the excluded section keyword.
    pub fn with_excluded_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.excluded_section_keyword = keyword.into();
        self
    }

    /// Set the generic text threshold.
    pub fn with_min_generic_text_len(mut self, len: usize) -> Self {
        self.min_generic_text_len = len;
        self
    }

    /// Set the text cleaner.
    pub fn with_cleaner(mut self, cleaner: TextCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Check if a section title names an excluded section.
    pub fn is_excluded(&self, title: &str) -> bool {
        !self.excluded_section_keyword.is_empty()
            && title
                .to_lowercase()
                .contains(&self.excluded_section_keyword.to_lowercase())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            site_origin: "https://next.amboss.com".to_string(),
            title_suffix: Some(" - AMBOSS".to_string()),
            fallback_title: Some("Medical Content".to_string()),
            image_caption_placeholder: "Medical Image".to_string(),
            excluded_section_keyword: "references".to_string(),
            min_generic_text_len: 20,
            cleaner: TextCleaner::default(),
        }
    }
}
