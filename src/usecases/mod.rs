//! Application use cases. Orchestrate domain logic via ports.

pub mod request_controller;
pub mod session;

pub use request_controller::{RequestController, RequestState, StatusKind, StatusMessage};
pub use session::AnalysisSession;
