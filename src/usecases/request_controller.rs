//! Request lifecycle: validate -> classify -> persist -> commit.
//!
//! - One request in flight at a time; a `submit` outside `Idle` is refused, never queued
//! - Collaborator faults are mapped to `AnalysisError` here and go no further
//! - History/stats are touched only after both collaborators succeeded

use crate::domain::validation::{normalize_reference, validate_record};
use crate::domain::{AnalysisError, AnalysisResult};
use crate::ports::{AnalysisObserver, ContentSource, PersistenceGateway, SentimentClassifier};
use crate::usecases::session::AnalysisSession;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

/// Lifecycle status of the current request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Validating,
    Classifying,
    Persisting,
    Succeeded(AnalysisResult),
    Failed(AnalysisError),
}

impl RequestState {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

/// Displayable status line for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    fn loading() -> Self {
        Self {
            kind: StatusKind::Loading,
            message: "Analyzing tweet...".to_string(),
        }
    }

    fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            message: "Analysis complete! Results saved to database.".to_string(),
        }
    }

    fn error(err: &AnalysisError) -> Self {
        Self {
            kind: StatusKind::Error,
            message: err.user_message().to_string(),
        }
    }
}

/// Returns the controller to `Idle` when a request ends, including when its future is dropped.
struct IdleOnDrop<'a>(&'a watch::Sender<RequestState>);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.send_replace(RequestState::Idle);
    }
}

/// Drives one analysis request at a time through its lifecycle.
pub struct RequestController {
    content: Arc<dyn ContentSource>,
    classifier: Arc<dyn SentimentClassifier>,
    gateway: Arc<dyn PersistenceGateway>,
    observer: Arc<dyn AnalysisObserver>,
    state: watch::Sender<RequestState>,
    status: watch::Sender<Option<StatusMessage>>,
}

impl RequestController {
    pub fn new(
        content: Arc<dyn ContentSource>,
        classifier: Arc<dyn SentimentClassifier>,
        gateway: Arc<dyn PersistenceGateway>,
        observer: Arc<dyn AnalysisObserver>,
    ) -> Self {
        Self {
            content,
            classifier,
            gateway,
            observer,
            state: watch::Sender::new(RequestState::Idle),
            status: watch::Sender::new(None),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Status line of the running or most recently finished request.
    pub fn status(&self) -> Option<StatusMessage> {
        self.status.borrow().clone()
    }

    /// Analyze `reference` and commit the result into `session`.
    ///
    /// Returns `AnalysisError::Busy` without side effects if a request is already in flight.
    /// On any other error, `session` is left exactly as it was.
    pub async fn submit(
        &self,
        session: &RwLock<AnalysisSession>,
        reference: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let accepted = self.state.send_if_modified(|state| {
            if state.is_idle() {
                *state = RequestState::Validating;
                true
            } else {
                false
            }
        });
        if !accepted {
            warn!("submit refused: request already in flight");
            return Err(AnalysisError::Busy);
        }
        let _idle = IdleOnDrop(&self.state);

        let outcome = self.run(session, reference).await;
        match &outcome {
            Ok(result) => {
                info!(
                    username = %result.username,
                    sentiment = %result.sentiment,
                    "analysis committed"
                );
                self.status.send_replace(Some(StatusMessage::success()));
                self.state
                    .send_replace(RequestState::Succeeded(result.clone()));
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                self.status.send_replace(Some(StatusMessage::error(err)));
                self.state.send_replace(RequestState::Failed(err.clone()));
            }
        }
        outcome
    }

    async fn run(
        &self,
        session: &RwLock<AnalysisSession>,
        reference: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let reference = normalize_reference(reference).ok_or(AnalysisError::EmptyReference)?;

        self.state.send_replace(RequestState::Classifying);
        self.status.send_replace(Some(StatusMessage::loading()));
        info!(reference, "analyzing");

        let content = self
            .content
            .fetch(reference)
            .await
            .map_err(|e| AnalysisError::Classification(e.to_string()))?;
        let classification = self
            .classifier
            .classify(&content)
            .await
            .map_err(|e| AnalysisError::Classification(e.to_string()))?;
        let record = classification.with_content(content);
        validate_record(&record).map_err(|e| AnalysisError::Classification(e.to_string()))?;
        debug!(sentiment = %record.sentiment, "classified");

        self.state.send_replace(RequestState::Persisting);
        self.gateway
            .persist(&record)
            .await
            .map_err(|e| AnalysisError::Persistence(e.to_string()))?;

        session.write().await.commit(record.clone());
        self.observer.on_analysis_complete(&record);

        Ok(record)
    }
}
