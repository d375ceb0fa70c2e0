//! Output file names derived from a document title or its source.

use regex::Regex;
use std::sync::LazyLock;

use crate::render::OutputFormat;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 50;

/// Slug used when a title has no usable characters.
const DEFAULT_SLUG: &str = "article";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("non-word pattern is valid"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("separator pattern is valid"));
static UNSAFE_SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]").expect("source pattern is valid"));

/// File-system-safe stem for a document.
///
/// The title wins when present. Without one, the last non-empty path
/// segment of `source` is used.
pub fn slug(title: Option<&str>, source: &str) -> String {
    match title {
        Some(title) => title_slug(title),
        None => source_slug(source),
    }
}

/// File name with the format's extension, e.g. `Iron_deficiency.md`.
pub fn output_filename(title: Option<&str>, source: &str, format: OutputFormat) -> String {
    format!("{}.{}", slug(title, source), format.extension())
}

fn title_slug(title: &str) -> String {
    let cleaned = NON_WORD.replace_all(title, "");
    let joined = SEPARATORS.replace_all(&cleaned, "_");
    let stem: String = joined.trim_matches('_').chars().take(MAX_SLUG_LEN).collect();
    if stem.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        stem
    }
}

fn source_slug(source: &str) -> String {
    let segment = source
        .rsplit(['/', '\\'])
        .find(|s| !s.is_empty())
        .unwrap_or_default();
    UNSAFE_SOURCE
        .replace_all(segment, "_")
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slug() {
        assert_eq!(
            slug(Some("Iron deficiency anemia (IDA)"), "ignored"),
            "Iron_deficiency_anemia_IDA"
        );
        assert_eq!(slug(Some("  -- Gout -- "), ""), "Gout");
        assert_eq!(slug(Some("Crohn's disease"), ""), "Crohns_disease");
    }

    #[test]
    fn test_title_without_word_characters() {
        assert_eq!(slug(Some("!!! ???"), "x"), "article");
    }

    #[test]
    fn test_title_slug_capped() {
        let title = "a".repeat(80);
        assert_eq!(slug(Some(&title), "").chars().count(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_source_slug() {
        assert_eq!(
            slug(None, "https://next.amboss.com/us/article/Xk0fNS"),
            "Xk0fNS"
        );
        assert_eq!(slug(None, "https://example.org/article/page.v2/"), "page_v2");
        assert_eq!(slug(None, "saved/Anemia page.html"), "Anemia_page_html");
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            output_filename(Some("Gout"), "", OutputFormat::Markdown),
            "Gout.md"
        );
        assert_eq!(
            output_filename(None, "pages/x1", OutputFormat::Html),
            "x1.html"
        );
        assert_eq!(
            output_filename(Some("Gout"), "", OutputFormat::Text),
            "Gout.txt"
        );
    }
}
