// Service exports
pub mod registry;
pub mod seed;

pub use registry::{ExpertRegistry, RegistryError, SharedRegistry, MAX_RECENT_CASES};
