//! AI adapter module. Implements SentimentClassifier.
//!
//! Provides OpenAI-compatible classifier and mock classifier for offline runs and tests.

pub mod mock_adapter;
pub mod openai_adapter;

pub use mock_adapter::MockClassifier;
pub use openai_adapter::OpenAiClassifier;
