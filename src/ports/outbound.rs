//! Outbound ports. Application calls into collaborators.
//!
//! Implemented by adapters. Faults surface as `DomainError`; timeouts are the adapter's concern.

use crate::domain::{AnalysisResult, Classification, DomainError};

/// Resolves a post reference (e.g. tweet URL) to the raw text to classify.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, reference: &str) -> Result<String, DomainError>;
}

/// Sentiment classifier. Produces label, summary, author and timestamp for raw content.
#[async_trait::async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, content: &str) -> Result<Classification, DomainError>;
}

/// Remote store for completed results.
#[async_trait::async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Send the full record. Any transport or service failure is a fault.
    async fn persist(&self, record: &AnalysisResult) -> Result<(), DomainError>;
}
