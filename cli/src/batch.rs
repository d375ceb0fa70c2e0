//! Batch processing helpers: input lists, output names, delays and the summary.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use rand::Rng;
use unfold::{slug, ExtractionStats, OutputFormat};

/// Prefix marking a failed result.
pub const FAILURE_MARKER: &str = "Error";

/// Result text for pages without any retained section.
pub const NO_CONTENT: &str = "No content found";

/// Read input paths, one per line. Blank lines and `#` comments are skipped.
pub fn read_input_list(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_input_list(&content))
}

fn parse_input_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Output file name for the `index`-th input (1-based).
pub fn batch_filename(
    index: usize,
    title: Option<&str>,
    source: &str,
    format: OutputFormat,
) -> String {
    format!(
        "page_{index:03}_{}.{}",
        slug(title, source),
        format.extension()
    )
}

/// Summary file name for a format.
pub fn summary_filename(format: OutputFormat) -> String {
    format!("_summary_{}.txt", format.name())
}

/// Check if a result text marks a failure.
pub fn is_failure(result: &str) -> bool {
    result.starts_with(FAILURE_MARKER)
}

/// Parse one `--delay` bound in seconds.
///
/// Only finite, non-negative numbers are accepted.
pub fn parse_delay(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;
    if !seconds.is_finite() {
        return Err(format!("'{value}' is not a finite number of seconds"));
    }
    if seconds < 0.0 {
        return Err(format!("'{value}' is negative"));
    }
    Ok(seconds)
}

/// Random pause between `min` and `max` seconds.
///
/// Bounds are swapped when reversed; non-positive or non-finite ranges give
/// no pause.
pub fn random_delay(min: f64, max: f64) -> Duration {
    if !min.is_finite() || !max.is_finite() {
        return Duration::ZERO;
    }
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let low = low.max(0.0);
    if high <= 0.0 {
        return Duration::ZERO;
    }
    if low >= high {
        return Duration::from_secs_f64(high);
    }
    Duration::from_secs_f64(rand::thread_rng().gen_range(low..=high))
}

/// Outcome of one batch input.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// Input path as listed
    pub source: String,
    /// Rendered output, or a failure-marked message
    pub result: String,
    /// Content counts of the extracted document, if any
    pub stats: Option<ExtractionStats>,
}

impl BatchEntry {
    /// Create an entry.
    pub fn new(source: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            result: result.into(),
            stats: None,
        }
    }

    /// Attach the content counts of the extracted document.
    pub fn with_stats(mut self, stats: ExtractionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Check if the entry failed.
    pub fn failed(&self) -> bool {
        is_failure(&self.result)
    }
}

/// Plain-text summary of a batch run.
pub fn summary(entries: &[BatchEntry], format: OutputFormat, generated: &str) -> String {
    let failed = entries.iter().filter(|e| e.failed()).count();
    let mut out = String::new();

    out.push_str("Extraction Summary\n");
    out.push_str("==================\n");
    out.push_str(&format!("Generated: {generated}\n"));
    out.push_str(&format!("Total inputs: {}\n", entries.len()));
    out.push_str(&format!("Successful: {}\n", entries.len() - failed));
    out.push_str(&format!("Failed: {failed}\n"));
    out.push_str(&format!("Format: {format}\n"));

    let mut totals = ExtractionStats::default();
    for stats in entries.iter().filter_map(|e| e.stats.as_ref()) {
        totals.merge(stats);
    }
    out.push_str(&format!(
        "Content: {} sections, {} tables, {} images, {} words\n\n",
        totals.section_count, totals.table_count, totals.image_count, totals.word_count
    ));
    out.push_str("Results:\n");
    out.push_str(&"-".repeat(50));
    out.push('\n');

    for entry in entries {
        let status = if entry.failed() { "✗" } else { "✓" };
        out.push_str(&format!("{status} {}\n", entry.source));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_list() {
        let list = "# saved pages\n\npages/anemia.html\n  pages/gout.html  \n#pages/skip.html\n";
        assert_eq!(
            parse_input_list(list),
            vec!["pages/anemia.html", "pages/gout.html"]
        );
    }

    #[test]
    fn test_read_input_list_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.txt");
        fs::write(&path, "a.html\n# b.html\nc.html\n").unwrap();
        assert_eq!(read_input_list(&path).unwrap(), vec!["a.html", "c.html"]);
    }

    #[test]
    fn test_batch_filename() {
        assert_eq!(
            batch_filename(7, Some("Iron deficiency"), "x", OutputFormat::Markdown),
            "page_007_Iron_deficiency.md"
        );
        assert_eq!(
            batch_filename(12, None, "saved/gout.html", OutputFormat::Html),
            "page_012_gout_html.html"
        );
        assert_eq!(summary_filename(OutputFormat::Text), "_summary_text.txt");
    }

    #[test]
    fn test_failure_marker() {
        assert!(is_failure("Error reading pages/a.html: not found"));
        assert!(!is_failure(NO_CONTENT));
        assert!(!is_failure("# Anemia\n\nError rates are low"));
    }

    #[test]
    fn test_random_delay_bounds() {
        for _ in 0..20 {
            let delay = random_delay(3.0, 1.0);
            assert!(delay >= Duration::from_secs(1) && delay <= Duration::from_secs(3));
        }
        assert_eq!(random_delay(0.0, 0.0), Duration::ZERO);
        assert_eq!(random_delay(2.0, 2.0), Duration::from_secs(2));
        assert_eq!(random_delay(f64::NAN, f64::NAN), Duration::ZERO);
        assert_eq!(random_delay(0.0, f64::INFINITY), Duration::ZERO);
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay("1.5"), Ok(1.5));
        assert_eq!(parse_delay(" 0 "), Ok(0.0));
        assert!(parse_delay("nan").is_err());
        assert!(parse_delay("inf").is_err());
        assert!(parse_delay("-1").is_err());
        assert!(parse_delay("soon").is_err());
    }

    #[test]
    fn test_summary() {
        let entries = vec![
            BatchEntry::new("a.html", "# A\n").with_stats(ExtractionStats {
                section_count: 2,
                table_count: 1,
                word_count: 40,
                ..Default::default()
            }),
            BatchEntry::new("c.html", "# C\n").with_stats(ExtractionStats {
                section_count: 3,
                image_count: 2,
                word_count: 15,
                ..Default::default()
            }),
            BatchEntry::new("b.html", "Error reading b.html: missing"),
        ];
        let text = summary(&entries, OutputFormat::Markdown, "2026-01-01 00:00:00");
        assert!(text.contains("Total inputs: 3\n"));
        assert!(text.contains("Successful: 2\n"));
        assert!(text.contains("Failed: 1\n"));
        assert!(text.contains("Format: markdown\n"));
        assert!(text.contains("Content: 5 sections, 1 tables, 2 images, 55 words\n"));
        assert!(text.contains("✓ a.html\n"));
        assert!(text.contains("✗ b.html\n"));
    }
}
