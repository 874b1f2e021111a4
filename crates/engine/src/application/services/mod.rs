//! Application services.

pub mod cta_resolver;
pub mod error;
pub mod progression_service;
pub mod types;

pub use cta_resolver::{StoreUrlResolver, StoreUrlSource};
pub use error::ServiceError;
pub use progression_service::GangProgressionService;
pub use types::{ChargeOutcome, DoctrineOutcome, UpgradePurchaseOutcome, XpGrantOutcome};
