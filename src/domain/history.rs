//! Bounded, newest-first history of committed results.

use crate::domain::AnalysisResult;

/// Maximum number of results kept in history.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    /// Newest first.
    entries: Vec<AnalysisResult>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Prepend `result`; the oldest entry is evicted once capacity is exceeded.
    pub fn commit(&mut self, result: AnalysisResult) {
        self.entries.insert(0, result);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Current entries, newest first.
    pub fn list(&self) -> &[AnalysisResult] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn result(n: i64) -> AnalysisResult {
        AnalysisResult {
            username: format!("@user{n}"),
            content: format!("post {n}"),
            sentiment: "Neutral".to_string(),
            summary: format!("post {n}..."),
            datetime: Utc.timestamp_opt(1_700_000_000 + n, 0).unwrap(),
        }
    }

    #[test]
    fn test_commit_prepends() {
        let mut history = HistoryStore::new();
        history.commit(result(1));
        history.commit(result(2));
        let list = history.list();
        assert_eq!(list[0].username, "@user2");
        assert_eq!(list[1].username, "@user1");
        assert_eq!(history.latest().unwrap().username, "@user2");
    }

    #[test]
    fn test_commit_evicts_oldest_beyond_capacity() {
        let mut history = HistoryStore::new();
        for n in 1..=11 {
            history.commit(result(n));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        let list = history.list();
        assert_eq!(list.len(), HISTORY_CAPACITY);
        assert!(list.iter().all(|r| r.username != "@user1"));
        assert_eq!(list[0].username, "@user11");
        assert_eq!(list[9].username, "@user2");
    }

    #[test]
    fn test_list_borrows_entries() {
        let mut history = HistoryStore::new();
        history.commit(result(1));
        let a: &[AnalysisResult] = history.list();
        let b: &[AnalysisResult] = history.list();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut history = HistoryStore::new();
        for n in 1..=25 {
            history.commit(result(n));
        }
        let list = history.list();
        for pair in list.windows(2) {
            assert!(pair[0].datetime > pair[1].datetime);
        }
    }
}
