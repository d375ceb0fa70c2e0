//! Best-effort expansion of collapsed sections on a live page.
//!
//! Some content is only present in the page once its collapsible region has
//! been toggled. The caller owns the browser session and exposes it through
//! [`RevealPage`]; a [`RevealChain`] then tries each [`RevealStrategy`] in
//! order until one reports success. Failures are never fatal: extraction
//! runs afterwards either way.

mod strategies;

pub use strategies::{ExpandedStateControls, GlobalToggle, SectionHeaders};

use std::fmt;
use std::time::Duration;

use crate::error::Result;
use crate::extract::{ExtractObserver, Markers};

/// Opaque reference to an element, owned by the page implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle(String);

impl ElementHandle {
    /// Wrap a page-specific element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Live page operations needed by the reveal strategies.
///
/// Implementations report a missing clickable element on wait as
/// [`Error::Timeout`](crate::Error::Timeout) and other session failures as
/// [`Error::Driver`](crate::Error::Driver).
pub trait RevealPage {
    /// All elements currently matching a CSS selector.
    fn find_all(&mut self, selector: &str) -> Result<Vec<ElementHandle>>;

    /// Wait until an element matching `selector` is clickable.
    fn wait_for_clickable(&mut self, selector: &str, timeout: Duration) -> Result<ElementHandle>;

    /// Click an element.
    fn click(&mut self, element: &ElementHandle) -> Result<()>;

    /// Read an attribute.
    fn attribute(&mut self, element: &ElementHandle, name: &str) -> Result<Option<String>>;

    /// Visible text of an element.
    fn text(&mut self, element: &ElementHandle) -> Result<String>;

    /// Check if an element is displayed.
    fn is_displayed(&mut self, element: &ElementHandle) -> Result<bool>;

    /// Block for the given duration to let the page settle.
    fn pause(&mut self, duration: Duration);
}

/// Selectors and pacing for the reveal strategies.
#[derive(Debug, Clone)]
pub struct RevealOptions {
    /// Global toggle controls, tried in order
    pub toggle_selectors: Vec<String>,

    /// Per-section header controls, tried in order
    pub header_selectors: Vec<String>,

    /// Controls carrying an expanded state
    pub expanded_state_selector: String,

    /// Selector for expanded content containers
    pub content_shown_selector: String,

    /// Selector for section nodes
    pub section_selector: String,

    /// Maximum wait for a toggle control to become clickable
    pub toggle_wait: Duration,

    /// Pause after clicking a global toggle
    pub toggle_settle: Duration,

    /// Pause after clicking an expanded-state control
    pub click_settle: Duration,

    /// Pause between the two clicks on an already expanded control
    pub reclick_settle: Duration,

    /// Pause after clicking a section header
    pub header_settle: Duration,

    /// Pause after the expanded-state strategy activated anything
    pub final_settle: Duration,

    /// Section text length above which content counts as visible
    pub min_visible_text: usize,
}

impl RevealOptions {
    /// Create reveal options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive selectors from a marker set.
    pub fn for_markers(markers: &Markers) -> Self {
        let section = markers.section_selector();
        Self {
            toggle_selectors: vec![
                markers.selector("toggle-all-sections-button"),
                r#"button[aria-label*="toggle"]"#.to_string(),
                r#"button[aria-label*="expand"]"#.to_string(),
                r#"button[aria-label*="collapse"]"#.to_string(),
                r#"[data-testid*="toggle"]"#.to_string(),
            ],
            header_selectors: vec![
                format!(r#"{section} [role="button"]"#),
                format!("{section} button"),
                format!("{section} h3"),
                format!("{section} h4"),
                format!(r#"{section} [class*="header"]"#),
            ],
            expanded_state_selector: "button[aria-expanded]".to_string(),
            content_shown_selector: markers.content_shown_selector(),
            section_selector: section,
            toggle_wait: Duration::from_secs(2),
            toggle_settle: Duration::from_secs(2),
            click_settle: Duration::from_secs(1),
            reclick_settle: Duration::from_millis(500),
            header_settle: Duration::from_millis(300),
            final_settle: Duration::from_secs(2),
            min_visible_text: 50,
        }
    }

    /// Set the global toggle selectors.
    pub fn with_toggle_selectors(mut self, selectors: Vec<String>) -> Self {
        self.toggle_selectors = selectors;
        self
    }

    /// Set the section header selectors.
    pub fn with_header_selectors(mut self, selectors: Vec<String>) -> Self {
        self.header_selectors = selectors;
        self
    }

    /// Set the toggle wait timeout.
    pub fn with_toggle_wait(mut self, wait: Duration) -> Self {
        self.toggle_wait = wait;
        self
    }

    /// Scale every settle pause by `factor`. `0.0` disables pauses.
    pub fn with_pace(mut self, factor: f64) -> Self {
        let factor = factor.max(0.0);
        for pause in [
            &mut self.toggle_settle,
            &mut self.click_settle,
            &mut self.reclick_settle,
            &mut self.header_settle,
            &mut self.final_settle,
        ] {
            *pause = pause.mul_f64(factor);
        }
        self
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::for_markers(&Markers::default())
    }
}

/// Check whether section content is visible on the page.
///
/// Visible means an expanded container exists, or some section node has
/// more than `min_visible_text` characters of trimmed text.
/// Sections whose text cannot be read are skipped.
pub fn content_visible(page: &mut dyn RevealPage, options: &RevealOptions) -> Result<bool> {
    if !page.find_all(&options.content_shown_selector)?.is_empty() {
        return Ok(true);
    }

    for section in page.find_all(&options.section_selector)? {
        match page.text(&section) {
            Ok(text) if text.trim().chars().count() > options.min_visible_text => return Ok(true),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping section {section} in visibility check: {e}"),
        }
    }
    Ok(false)
}

/// One way of expanding the sections of a page.
pub trait RevealStrategy {
    /// Stable strategy name, reported to observers.
    fn name(&self) -> &'static str;

    /// Try to expand the page. `Ok(true)` stops the chain.
    fn attempt(&self, page: &mut dyn RevealPage, options: &RevealOptions) -> Result<bool>;
}

/// Ordered list of reveal strategies.
pub struct RevealChain {
    strategies: Vec<Box<dyn RevealStrategy>>,
    options: RevealOptions,
}

impl RevealChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            options: RevealOptions::default(),
        }
    }

    /// Append a strategy.
    pub fn with_strategy(mut self, strategy: impl RevealStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Set the options.
    pub fn with_options(mut self, options: RevealOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the options.
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Names of the strategies in order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run strategies in order until one succeeds.
    ///
    /// Errors from a strategy are reported and count as failure; the
    /// chain itself never fails.
    pub fn run(&self, page: &mut dyn RevealPage, observer: &mut dyn ExtractObserver) -> bool {
        for strategy in &self.strategies {
            match strategy.attempt(page, &self.options) {
                Ok(success) => {
                    observer.on_reveal_attempt(strategy.name(), success, None);
                    if success {
                        log::debug!("Sections revealed by {}", strategy.name());
                        return true;
                    }
                }
                Err(e) => {
                    let message = e.to_string();
                    log::debug!("Reveal strategy {} failed: {message}", strategy.name());
                    observer.on_reveal_attempt(strategy.name(), false, Some(&message));
                }
            }
        }
        log::debug!("No reveal strategy succeeded");
        false
    }
}

impl Default for RevealChain {
    /// Global toggle, then expanded-state controls, then section headers.
    fn default() -> Self {
        Self::new()
            .with_strategy(GlobalToggle)
            .with_strategy(ExpandedStateControls)
            .with_strategy(SectionHeaders)
    }
}
