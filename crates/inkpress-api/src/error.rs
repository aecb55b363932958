//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
///
/// Variants carry strings rather than source errors so values stay `Clone`
/// for reactive UI state. Display strings are user-facing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-success HTTP status.
    #[error("Server responded with HTTP {0}")]
    Status(u16),

    /// The backend returned `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The response body was not the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// `success: true` but no `data` payload.
    #[error("Server response was missing data")]
    MissingData,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
