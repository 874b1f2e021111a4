//! Progression service errors.

use gangforge_domain::{DomainError, GangId};

use crate::infrastructure::ports::{FundsError, StoreError};

/// Errors surfaced by the progression facade.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Gang not found: {0}")]
    GangNotFound(GangId),
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
    #[error("Funds error: {0}")]
    Funds(#[from] FundsError),
}

impl ServiceError {
    /// The domain rejection inside this error, if that is what it is.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}
