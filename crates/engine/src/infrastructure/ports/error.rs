//! Error types for the engine's outbound ports.

use thiserror::Error;

/// Persistence collaborator failures.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Corrupt gang record: {0}")]
    Corrupt(String),
}

/// Ordinary gang-funds collaborator failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FundsError {
    /// The gang's treasury cannot cover the debit.
    #[error("Insufficient gang funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("Funds backend error: {0}")]
    Backend(String),
}

/// Credits-store provider lookup failures.
///
/// These never surface to facade callers: the CTA resolver falls through to
/// the configured default URL instead.
#[derive(Debug, Error, Clone)]
pub enum CreditsStoreError {
    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned an unusable URL: {0}")]
    InvalidUrl(String),

    #[error("Provider lookup timed out")]
    Timeout,
}
