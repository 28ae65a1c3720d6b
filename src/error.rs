//! Error types for Curator API operations.

use thiserror::Error;

/// Errors that can occur during Curator API operations.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Configuration is missing or incomplete.
    #[error("Curator configuration required: {0}")]
    ConfigMissing(String),

    /// The server rejected the request (status 300-499).
    #[error("Bad Request {status}! message: {body}")]
    ClientError { status: u16, body: String },

    /// The server failed to process the request (status >= 500).
    #[error("Server Error {status}! message: {body}")]
    ServerError { status: u16, body: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl CuratorError {
    /// The HTTP status code carried by a status-classified failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            CuratorError::ClientError { status, .. }
            | CuratorError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for Curator operations.
pub type Result<T> = core::result::Result<T, CuratorError>;
