//! Domain aggregates.

pub mod gang;

pub use gang::{GangProgression, GangProgressionSnapshot};
