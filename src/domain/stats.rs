//! Lifetime sentiment counters. Independent of history eviction.

use crate::domain::{Sentiment, Stats};

#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    stats: Stats,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one committed result.
    pub fn record(&mut self, sentiment: Sentiment) {
        self.stats.total += 1;
        match sentiment {
            Sentiment::Positive => self.stats.positive += 1,
            Sentiment::Negative => self.stats.negative += 1,
            Sentiment::Neutral => {}
        }
    }

    pub fn snapshot(&self) -> Stats {
        self.stats
    }
}
