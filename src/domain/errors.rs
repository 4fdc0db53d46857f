//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into `DomainError`; the request controller maps those
//! into `AnalysisError` at its boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Content source error: {0}")]
    Content(String),

    #[error("Persistence gateway error: {0}")]
    Persistence(String),

    #[error("Invalid analysis record: {0}")]
    Shape(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}

/// Terminal failure of a single analysis request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("reference is empty")]
    EmptyReference,

    #[error("classification failed: {0}")]
    Classification(String),

    #[error("persistence failed: {0}")]
    Persistence(String),

    /// Another request is in flight. Not a lifecycle state; the running request is untouched.
    #[error("an analysis is already in progress")]
    Busy,
}

impl AnalysisError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::EmptyReference => "Please enter a tweet URL",
            AnalysisError::Classification(_) => "Failed to analyze tweet. Please try again.",
            AnalysisError::Persistence(_) => "Failed to save analysis. Please try again.",
            AnalysisError::Busy => "An analysis is already running. Please wait.",
        }
    }
}
