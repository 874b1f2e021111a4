//! Outbound port traits for the progression engine.
//!
//! The facade talks to every external collaborator through these traits;
//! adapters live next door, mocks are generated for tests.

pub mod error;

use async_trait::async_trait;

use gangforge_domain::{GangId, GangProgressionSnapshot};

pub use error::{CreditsStoreError, FundsError, StoreError};

/// Persistence collaborator: one progression record per gang.
///
/// Only the in-memory shape is this core's concern; the storage encoding
/// belongs to the adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GangStore: Send + Sync {
    async fn load(&self, gang_id: GangId) -> Result<Option<GangProgressionSnapshot>, StoreError>;
    async fn save(&self, snapshot: &GangProgressionSnapshot) -> Result<(), StoreError>;
    async fn delete(&self, gang_id: GangId) -> Result<(), StoreError>;
}

/// Ordinary-funds collaborator, debited before an upgrade purchase commits.
///
/// The facade invokes this inside the gang's critical section so the debit
/// and the ownership change act as one atomic step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FundsPort: Send + Sync {
    async fn debit(&self, gang_id: GangId, amount: u64) -> Result<(), FundsError>;
}

/// Credits-store provider: the single lookup consumed by the CTA resolver's
/// second fallback step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditsStorePort: Send + Sync {
    async fn credits_store_url(&self) -> Result<String, CreditsStoreError>;
}
