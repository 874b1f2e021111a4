//! Application layer: the progression facade and its result types.

pub mod services;
