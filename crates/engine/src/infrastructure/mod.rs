//! External dependency implementations (ports + adapters) and settings.

pub mod credits_store;
pub mod memory_store;
pub mod ports;
pub mod settings;

pub use credits_store::HttpCreditsStoreClient;
pub use memory_store::InMemoryGangStore;
pub use settings::ProgressionSettings;
