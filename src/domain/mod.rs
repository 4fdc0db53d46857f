//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod display;
pub mod entities;
pub mod errors;
pub mod history;
pub mod stats;
pub mod validation;

pub use entities::{AnalysisResult, Classification, Sentiment, Stats};
pub use errors::{AnalysisError, DomainError};
pub use history::{HISTORY_CAPACITY, HistoryStore};
pub use stats::StatsAggregator;
