//! In-memory persistence gateway. Used in offline mode and tests.

use crate::domain::{AnalysisResult, DomainError};
use crate::ports::PersistenceGateway;
use std::collections::VecDeque;
use tokio::sync::RwLock;
use tracing::info;

/// Number of most recent records kept; older ones are dropped, only counted.
pub const MEMORY_RETAIN: usize = 100;

#[derive(Default)]
struct Store {
    recent: VecDeque<AnalysisResult>,
    accepted: u64,
}

/// Keeps the most recent persisted records in memory for the life of the process.
pub struct MemoryGateway {
    store: RwLock<Store>,
    fail_with: Option<String>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
            fail_with: None,
        }
    }

    /// Gateway that rejects every record with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            fail_with: Some(message.into()),
        }
    }

    /// Retained records, oldest first. At most `MEMORY_RETAIN`.
    pub async fn records(&self) -> Vec<AnalysisResult> {
        self.store.read().await.recent.iter().cloned().collect()
    }

    /// Total records accepted, including ones no longer retained.
    pub async fn accepted(&self) -> u64 {
        self.store.read().await.accepted
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn persist(&self, record: &AnalysisResult) -> Result<(), DomainError> {
        if let Some(msg) = &self.fail_with {
            return Err(DomainError::Persistence(msg.clone()));
        }
        let mut store = self.store.write().await;
        store.recent.push_back(record.clone());
        if store.recent.len() > MEMORY_RETAIN {
            store.recent.pop_front();
        }
        store.accepted += 1;
        info!(accepted = store.accepted, "[MEMORY] record persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(n: usize) -> AnalysisResult {
        AnalysisResult {
            username: format!("@user{n}"),
            content: String::new(),
            sentiment: "Neutral".to_string(),
            summary: String::new(),
            datetime: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_retains_only_recent_records() {
        let gateway = MemoryGateway::new();
        for n in 1..=MEMORY_RETAIN + 5 {
            gateway.persist(&record(n)).await.unwrap();
        }

        let records = gateway.records().await;
        assert_eq!(records.len(), MEMORY_RETAIN);
        assert_eq!(records[0].username, "@user6");
        assert_eq!(
            records.last().unwrap().username,
            format!("@user{}", MEMORY_RETAIN + 5)
        );
        assert_eq!(gateway.accepted().await, (MEMORY_RETAIN + 5) as u64);
    }

    #[tokio::test]
    async fn test_failing_gateway_stores_nothing() {
        let gateway = MemoryGateway::failing("down");
        let err = gateway.persist(&record(1)).await.unwrap_err();
        assert_eq!(err, DomainError::Persistence("down".to_string()));
        assert_eq!(gateway.accepted().await, 0);
    }
}
