//! Typed errors for the extraction pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Fetch errors never cross the
//! fetcher boundary: they are logged and collapsed into "no text extracted".

use thiserror::Error;

/// Errors that can occur while fetching and extracting paper content.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failed (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// PDF bytes could not be decoded into text
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// Document yielded no title, abstract, or body text
    #[error("no extractable content: {url}")]
    NoContent { url: String },
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
