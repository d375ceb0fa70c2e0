//! Text normalization applied to every string the extractor stores.

use regex::Regex;
use std::sync::LazyLock;

/// UI labels that leak into page text from collapsible widgets.
pub const DEFAULT_UI_CHROME: &[&str] = &["Maximize table", "Table Quiz", "Collapse", "Notes", "Feedback"];

static SHARED: LazyLock<TextCleaner> = LazyLock::new(TextCleaner::default);

/// Clean text with the default cleaner.
pub fn clean_text(text: &str) -> String {
    SHARED.clean(text)
}

/// Whitespace and marker normalization.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    reference_regex: Regex,
    ui_chrome: Vec<String>,
}

impl TextCleaner {
    /// Create a cleaner that removes the given UI labels.
    pub fn with_ui_chrome<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            // Citation markers such as [1] or [2][3]
            reference_regex: Regex::new(r"\[\d+\](?:\[\d+\])*")
                .expect("reference marker pattern is valid"),
            ui_chrome: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the UI labels removed by this cleaner.
    pub fn ui_chrome(&self) -> &[String] {
        &self.ui_chrome
    }

    /// Clean a string.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut output = collapse_whitespace(text);

        if output.contains('[') {
            output = self.reference_regex.replace_all(&output, "").into_owned();
        }

        for label in &self.ui_chrome {
            if output.contains(label.as_str()) {
                output = output.replace(label.as_str(), "");
            }
        }

        // Removals can leave doubled spaces behind.
        collapse_whitespace(&output)
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::with_ui_chrome(DEFAULT_UI_CHROME.iter().copied())
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
