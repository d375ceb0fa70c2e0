//! Observer hooks for following extraction and reveal decisions.
//!
//! An observer is passed explicitly to each pipeline call. It replaces a
//! global debug switch: callers that want diagnostics pass
//! [`LogObserver`] or [`RecordingObserver`], everyone else passes
//! [`NoopObserver`].
//!
//! # Example
//!
//! ```
//! use unfold::extract::{ExtractObserver, RecordingObserver};
//! use unfold::{Unfold, Extraction};
//!
//! let mut observer = RecordingObserver::new();
//! let extraction = Unfold::new().parse_observed("<html></html>", &mut observer);
//! assert!(matches!(extraction, Extraction::NoSectionsFound));
//! ```

use crate::model::Block;

/// Why a section did not make it into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Title matched the excluded keyword
    Excluded,
    /// No content container was found
    NoContainer,
    /// The container produced no blocks
    NoBlocks,
}

impl SkipReason {
    /// Short description.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Excluded => "excluded by title",
            SkipReason::NoContainer => "no content container",
            SkipReason::NoBlocks => "no content blocks",
        }
    }
}

/// Trait for observing pipeline decisions.
///
/// All methods do nothing by default.
pub trait ExtractObserver {
    /// Called once the document title is resolved.
    ///
    /// # Arguments
    /// * `strategy` - Name of the title strategy that succeeded
    /// * `title` - The resolved title
    fn on_document_title(&mut self, strategy: &str, title: &str) {
        let _ = (strategy, title);
    }

    /// Called for each section title.
    ///
    /// `strategy` is `None` when the positional placeholder was used.
    fn on_section_title(&mut self, index: usize, strategy: Option<&str>, title: &str) {
        let _ = (index, strategy, title);
    }

    /// Called when a section is dropped.
    fn on_section_skipped(&mut self, index: usize, title: &str, reason: SkipReason) {
        let _ = (index, title, reason);
    }

    /// Called when a section is kept.
    fn on_section_extracted(&mut self, index: usize, title: &str, block_count: usize) {
        let _ = (index, title, block_count);
    }

    /// Called for each block produced by the block builder.
    fn on_block(&mut self, block: &Block) {
        let _ = block;
    }

    /// Called after each reveal strategy attempt.
    ///
    /// `error` carries the failure message when the attempt errored.
    fn on_reveal_attempt(&mut self, strategy: &str, success: bool, error: Option<&str>) {
        let _ = (strategy, success, error);
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl ExtractObserver for NoopObserver {}

/// Observer that forwards every event to the `log` facade at debug level.
#[derive(Debug, Clone, Default)]
pub struct LogObserver;

impl ExtractObserver for LogObserver {
    fn on_document_title(&mut self, strategy: &str, title: &str) {
        log::debug!("Document title from {strategy}: {title}");
    }

    fn on_section_title(&mut self, index: usize, strategy: Option<&str>, title: &str) {
        log::debug!(
            "Section {} title from {}: {title}",
            index + 1,
            strategy.unwrap_or("placeholder")
        );
    }

    fn on_section_skipped(&mut self, index: usize, title: &str, reason: SkipReason) {
        log::debug!("Skipping section {} ({title}): {}", index + 1, reason.as_str());
    }

    fn on_section_extracted(&mut self, index: usize, title: &str, block_count: usize) {
        log::debug!("Extracted section {} ({title}) with {block_count} blocks", index + 1);
    }

    fn on_reveal_attempt(&mut self, strategy: &str, success: bool, error: Option<&str>) {
        match error {
            Some(e) => log::debug!("Reveal strategy {strategy} failed: {e}"),
            None => log::debug!("Reveal strategy {strategy} success={success}"),
        }
    }
}

/// One recorded pipeline event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverEvent {
    DocumentTitle { strategy: String, title: String },
    SectionTitle { index: usize, strategy: Option<String>, title: String },
    SectionSkipped { index: usize, title: String, reason: SkipReason },
    SectionExtracted { index: usize, title: String, block_count: usize },
    Block { kind: &'static str },
    RevealAttempt { strategy: String, success: bool, error: Option<String> },
}

/// Observer that keeps every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<ObserverEvent>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get recorded events.
    pub fn events(&self) -> &[ObserverEvent] {
        &self.events
    }

    /// Titles of sections that were skipped, with the reason.
    pub fn skipped_sections(&self) -> Vec<(&str, SkipReason)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ObserverEvent::SectionSkipped { title, reason, .. } => {
                    Some((title.as_str(), *reason))
                }
                _ => None,
            })
            .collect()
    }

    /// Names of reveal strategies attempted, in order.
    pub fn reveal_attempts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ObserverEvent::RevealAttempt { strategy, .. } => Some(strategy.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ExtractObserver for RecordingObserver {
    fn on_document_title(&mut self, strategy: &str, title: &str) {
        self.events.push(ObserverEvent::DocumentTitle {
            strategy: strategy.to_string(),
            title: title.to_string(),
        });
    }

    fn on_section_title(&mut self, index: usize, strategy: Option<&str>, title: &str) {
        self.events.push(ObserverEvent::SectionTitle {
            index,
            strategy: strategy.map(str::to_string),
            title: title.to_string(),
        });
    }

    fn on_section_skipped(&mut self, index: usize, title: &str, reason: SkipReason) {
        self.events.push(ObserverEvent::SectionSkipped {
            index,
            title: title.to_string(),
            reason,
        });
    }

    fn on_section_extracted(&mut self, index: usize, title: &str, block_count: usize) {
        self.events.push(ObserverEvent::SectionExtracted {
            index,
            title: title.to_string(),
            block_count,
        });
    }

    fn on_block(&mut self, block: &Block) {
        self.events.push(ObserverEvent::Block {
            kind: block.kind_name(),
        });
    }

    fn on_reveal_attempt(&mut self, strategy: &str, success: bool, error: Option<&str>) {
        self.events.push(ObserverEvent::RevealAttempt {
            strategy: strategy.to_string(),
            success,
            error: error.map(str::to_string),
        });
    }
}
