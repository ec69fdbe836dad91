//! Error types for slide extraction.
//!
//! [`SlidesError`] covers every failure the library can report. Callers that
//! only care about the coarse category (could the page be reached at all, or
//! was it reached but empty?) use [`SlidesError::kind`].
//!
//! # Example
//!
//! ```rust
//! use itch_slides_core::{ErrorKind, SlidesError};
//!
//! let err = SlidesError::Extraction("no slides found".to_string());
//! assert_eq!(err.kind(), ErrorKind::Extraction);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and extracting slides.
#[derive(Error, Debug)]
pub enum SlidesError {
    /// HTTP transport errors from reqwest.
    ///
    /// DNS failures, refused connections, TLS problems and body read errors
    /// all land here.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The source page answered with a non-success status.
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page was fetched but no usable slide nodes were found.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// A configured CSS selector could not be parsed.
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A configured link pattern is not a valid regular expression.
    #[error("Invalid link pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Selector chain file errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slides could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Coarse error category used by call sites to pick a recovery policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source page could not be reached.
    Fetch,
    /// The page was reached but yielded no slides.
    Extraction,
    /// Configuration, I/O or serialization problems.
    Other,
}

impl ErrorKind {
    /// Short lowercase label, used in server error payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Fetch => "fetch",
            ErrorKind::Extraction => "extraction",
            ErrorKind::Other => "other",
        }
    }
}

impl SlidesError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "fetch")]
            SlidesError::Fetch(_) => ErrorKind::Fetch,
            SlidesError::Timeout { .. } | SlidesError::HttpStatus { .. } | SlidesError::InvalidUrl(_) => {
                ErrorKind::Fetch
            }
            SlidesError::Extraction(_) => ErrorKind::Extraction,
            _ => ErrorKind::Other,
        }
    }
}

/// Result type alias for SlidesError.
pub type Result<T> = std::result::Result<T, SlidesError>;
