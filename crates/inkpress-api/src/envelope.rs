//! The backend's JSON response envelope.

use crate::ApiError;
use serde::Deserialize;

/// Every backend endpoint wraps its payload in this shape:
/// `{ success: boolean, data: ..., message?: string }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    // No `#[serde(default)]` here: serde already treats a missing field as
    // `None` for `Option`, and the attribute would bound `T: Default`.
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into the payload.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.rejection_message()));
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Unwrap a mutation envelope where no payload is expected.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.rejection_message()));
        }
        Ok(())
    }

    fn rejection_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "The server rejected the request".to_string())
    }
}
