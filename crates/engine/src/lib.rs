//! GangForge engine library.
//!
//! In-process service layer around the progression domain:
//!
//! - `application/` - the per-gang facade and CTA resolution
//! - `infrastructure/` - outbound ports, adapters, and settings
//! - `stores/` - the per-gang state registry
//!
//! There is no wire protocol or CLI here; the surrounding game-server
//! process consumes this crate directly.

pub mod application;
pub mod infrastructure;
pub mod stores;

pub use application::services::{
    ChargeOutcome, DoctrineOutcome, GangProgressionService, ServiceError, StoreUrlResolver,
    UpgradePurchaseOutcome, XpGrantOutcome,
};
pub use infrastructure::{HttpCreditsStoreClient, InMemoryGangStore, ProgressionSettings};
pub use infrastructure::ports::{CreditsStorePort, FundsPort, GangStore};
pub use stores::GangRegistry;
