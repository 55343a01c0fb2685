//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// Every operation either returns its declared payload or fails with
/// exactly one of these kinds; nothing is retried or swallowed.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection failure, timeout, or other transport-level I/O error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered with an HTML page where JSON or PDF was
    /// expected. CxReports serves its login page with a 200 status, so
    /// this is the only signal that a token has expired or is invalid.
    #[error("unauthenticated: server returned an HTML page instead of a payload")]
    Unauthenticated,

    /// The PDF endpoint answered with a non-PDF content type.
    #[error("invalid content type: expected {expected}, got {actual:?}")]
    InvalidContentType {
        expected: &'static str,
        actual: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
