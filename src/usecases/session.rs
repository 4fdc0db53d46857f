//! Analysis session: history and statistics owned by the caller.
//!
//! Both are mutated together, and only through [`AnalysisSession::commit`], which the
//! request controller calls after classification and persistence have succeeded.

use crate::domain::{AnalysisResult, HistoryStore, Stats, StatsAggregator};

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    history: HistoryStore,
    stats: StatsAggregator,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` in stats and history. Stats are lifetime counters and are not
    /// decremented when history evicts; only exact `Positive`/`Negative` labels are counted.
    pub(crate) fn commit(&mut self, result: AnalysisResult) {
        self.stats.record(result.counted_category());
        self.history.commit(result);
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn stats(&self) -> Stats {
        self.stats.snapshot()
    }
}
