//! In-process state stores.

pub mod gang_registry;

pub use gang_registry::GangRegistry;
