//! Error types for unfold library.

use std::io;
use thiserror::Error;

/// Result type alias for unfold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while revealing, extracting or rendering pages.
///
/// Extraction itself never fails: a page without usable sections is reported
/// as [`crate::Extraction::NoSectionsFound`]. The only error the renderer
/// raises is [`Error::UnsupportedFormat`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested output format is not one of text, markdown or html.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// A live page did not reach the awaited state in time.
    #[error("Timed out waiting for {0}")]
    Timeout(String),

    /// The page driver failed to perform an interaction.
    #[error("Page driver error: {0}")]
    Driver(String),

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),
}
