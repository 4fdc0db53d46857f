//! Persistence gateway adapters. Implement PersistenceGateway.

pub mod http_gateway;
pub mod memory_gateway;

pub use http_gateway::{DEFAULT_PERSIST_URL, HttpPersistenceGateway};
pub use memory_gateway::MemoryGateway;
