//! GangForge domain - gang progression types, value objects, and invariants.
//!
//! Pure domain layer: no async, no I/O, no globals. Static registries
//! (catalog, doctrines, curve config) are immutable structures built once at
//! process start and passed by reference into the service facade.

pub mod aggregates;
pub mod catalog;
pub mod curve;
pub mod doctrines;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{GangProgression, GangProgressionSnapshot};
pub use catalog::{UpgradeCatalog, UpgradeDefinition};
pub use curve::{CurveConfig, LevelCurve};
pub use doctrines::{DoctrineDefinition, DoctrineRegistry, DoctrineSelection};
pub use error::DomainError;
pub use events::ProgressionEvent;
pub use ids::GangId;
pub use value_objects::{
    DoctrineBonuses, DoctrineId, PremiumCreditAction, UpgradeCategory, UpgradeId,
    INSUFFICIENT_PREMIUM_CREDITS,
};
