/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization)
[OUTPUT]: Structured error types with status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task store adapter
#[derive(Error, Debug)]
pub enum TaskStoreError {
    /// HTTP request failed before a response existed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Store returned a non-success response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TaskStoreError {
    /// Check whether the error is a transport failure (no response existed)
    pub fn is_transport(&self) -> bool {
        matches!(self, TaskStoreError::Http(_))
    }

    /// Response status code, when the store answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskStoreError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskStoreError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for task store operations
pub type Result<T> = std::result::Result<T, TaskStoreError>;
