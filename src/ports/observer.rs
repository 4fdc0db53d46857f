//! Completion notification port.

use crate::domain::AnalysisResult;

/// Called exactly once per committed result, synchronously inside the commit step.
///
/// Implementations must not block; they run before the controller returns to `Idle`.
pub trait AnalysisObserver: Send + Sync {
    fn on_analysis_complete(&self, result: &AnalysisResult);
}

/// Observer that ignores notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {
    fn on_analysis_complete(&self, _result: &AnalysisResult) {}
}
