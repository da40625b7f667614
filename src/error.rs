//! Error types for the iTunes catalog client.

use thiserror::Error;

/// Main error type for all iTunes catalog operations.
#[derive(Debug, Error)]
pub enum ItunesError {
    /// HTTP request failed before a response body was obtained.
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The endpoint answered 2xx but with an empty body.
    #[error("Empty response body")]
    EmptyBody,

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A track lookup payload had no leading collection summary record.
    #[error("Lookup response missing the collection summary record")]
    MissingSummary,
}

impl ItunesError {
    /// Whether this is a network-category failure (no usable body obtained),
    /// as opposed to a decode-category one (body received but malformed).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ItunesError::Transport(_) | ItunesError::Status(_) | ItunesError::EmptyBody
        )
    }
}

/// Result type alias for iTunes catalog operations.
pub type Result<T> = std::result::Result<T, ItunesError>;
