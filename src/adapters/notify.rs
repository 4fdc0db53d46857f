//! Completion observers.

use crate::domain::AnalysisResult;
use crate::ports::AnalysisObserver;
use tracing::info;

/// Logs each completed analysis as a structured event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn on_analysis_complete(&self, result: &AnalysisResult) {
        info!(
            username = %result.username,
            sentiment = %result.sentiment,
            datetime = %result.datetime.to_rfc3339(),
            "analysis complete"
        );
    }
}
