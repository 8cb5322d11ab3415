//! Error types for the article discovery pipeline
//!
//! Only `MissingInput` and the browser/navigation failures ever reach a client
//! as an error response. Summarization failures are downgraded to a sentinel
//! string inside the pipeline and never escape it.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type alias for scout operations
pub type ScoutResult<T> = Result<T, ScoutError>;

/// Error types for article discovery
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Empty or missing search prompt
    #[error("missing input")]
    MissingInput,

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// Browser executable could not be found or launched
    #[error("Failed to launch browser: {0}")]
    BrowserLaunch(String),

    /// Browser-level failure while navigating or reading the page
    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// Navigation did not settle inside its time budget
    #[error("Navigation to {url} timed out after {timeout_secs} seconds")]
    Timeout { url: String, timeout_secs: u64 },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion endpoint failure (never surfaced to clients)
    #[error("Summarization failed: {0}")]
    Summarization(String),
}

impl ScoutError {
    /// HTTP status the API reports for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ScoutError {
    fn from(error: reqwest::Error) -> Self {
        ScoutError::Summarization(error.to_string())
    }
}
