//! Domain events.

pub mod progression_events;

pub use progression_events::ProgressionEvent;
