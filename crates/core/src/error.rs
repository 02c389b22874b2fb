//! Error types for mdconv operations.
//!
//! This module defines the main error type [`MdconvError`] which represents
//! all possible errors that can occur during conversion, URL fetching, and
//! table manipulation.
//!
//! # Example
//!
//! ```rust
//! use mdconv_core::{MdconvError, Result};
//!
//! fn require_input(text: &str) -> Result<&str> {
//!     if text.is_empty() {
//!         return Err(MdconvError::Conversion("empty input".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion and fetching operations.
///
/// This enum represents all possible errors that can occur during
/// HTML/Markdown conversion, HTTP fetching, file I/O, and table grid
/// manipulation.
///
/// # Example
///
/// ```rust
/// use mdconv_core::{ConversionOptions, MdconvError, html_to_markdown};
///
/// match html_to_markdown("<p>hi</p>", &ConversionOptions::default()) {
///     Ok(markdown) => println!("{}", markdown),
///     Err(MdconvError::Conversion(msg)) => eprintln!("conversion failed: {}", msg),
///     Err(e) => eprintln!("error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum MdconvError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL scheme other than `http` or `https`.
    ///
    /// The fetcher refuses non-web schemes before issuing any request.
    #[error("Unsupported URL scheme: {0} (only http and https are allowed)")]
    UnsupportedScheme(String),

    /// Upstream server responded with a non-success status.
    ///
    /// Carries the status code and its canonical reason so callers can
    /// relay both to their own clients.
    #[error("Upstream server returned {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    /// HTML-to-Markdown or Markdown-to-HTML conversion failure.
    ///
    /// Wraps errors raised by the underlying serializer. Callers that want
    /// the soft-fail behavior flatten this into a display string at the UI
    /// boundary instead of propagating it.
    #[error("Conversion failed: {0}")]
    Conversion(String),

    /// Removing a row would leave the table without a data row.
    ///
    /// A table grid always keeps its header row plus at least one data row;
    /// the delete is refused and the grid is unchanged.
    #[error("Table must keep a header row and at least one data row")]
    TableMinRows,

    /// Removing a column would leave the table empty.
    #[error("Table must keep at least one column")]
    TableMinColumns,

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("File I/O failed: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for MdconvError.
///
/// This is a convenience alias for `std::result::Result<T, MdconvError>`.
pub type Result<T> = std::result::Result<T, MdconvError>;
