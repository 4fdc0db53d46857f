//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into infrastructure (collaborators)
//! - Observer: Notified by the application after each commit

pub mod inbound;
pub mod observer;
pub mod outbound;

pub use inbound::InputPort;
pub use observer::{AnalysisObserver, NoopObserver};
pub use outbound::{ContentSource, PersistenceGateway, SentimentClassifier};
