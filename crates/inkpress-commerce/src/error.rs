//! Commerce error types.

use thiserror::Error;

/// Errors produced by client-side commerce logic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Currency mismatch in price arithmetic.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// A design proof was decided twice.
    #[error("Design proof already decided: {0}")]
    ProofAlreadyDecided(String),
}
