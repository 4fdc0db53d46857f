//! Mock classifier for running without API calls.
//!
//! Keyword heuristic by default; can also replay a fixed response or a fixed fault.

use crate::domain::{Classification, DomainError};
use crate::ports::SentimentClassifier;
use chrono::Utc;
use std::time::Duration;
use tracing::info;

/// Summary length (in characters) before the ellipsis.
const SUMMARY_CHARS: usize = 50;
const MOCK_USERNAME: &str = "@dummy_user";

enum Behavior {
    Heuristic,
    Response(Classification),
    Fail(String),
}

/// Mock sentiment classifier.
///
/// Simulates network latency with configurable delay.
pub struct MockClassifier {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    behavior: Behavior,
}

impl MockClassifier {
    /// Keyword heuristic with default delay (100ms).
    pub fn new() -> Self {
        Self {
            delay_ms: 100,
            behavior: Behavior::Heuristic,
        }
    }

    /// Keyword heuristic with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            behavior: Behavior::Heuristic,
        }
    }

    /// Always return `classification`, without delay.
    pub fn with_response(classification: Classification) -> Self {
        Self {
            delay_ms: 0,
            behavior: Behavior::Response(classification),
        }
    }

    /// Always fail with `message`, without delay.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            behavior: Behavior::Fail(message.into()),
        }
    }

    fn heuristic(content: &str) -> Classification {
        let summary: String = content.chars().take(SUMMARY_CHARS).collect();
        let sentiment = if content.contains("great") {
            "Positive"
        } else {
            "Neutral"
        };
        Classification {
            sentiment: sentiment.to_string(),
            summary: format!("{}...", summary),
            username: MOCK_USERNAME.to_string(),
            datetime: Utc::now(),
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SentimentClassifier for MockClassifier {
    async fn classify(&self, content: &str) -> Result<Classification, DomainError> {
        info!(content_len = content.len(), "[MOCK] Simulating classification");

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.behavior {
            Behavior::Heuristic => Ok(Self::heuristic(content)),
            Behavior::Response(c) => Ok(c.clone()),
            Behavior::Fail(msg) => Err(DomainError::Classifier(msg.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_heuristic_positive() {
        let adapter = MockClassifier::with_delay(10);
        let text = "This is a great example tweet for testing our AI tool.";

        let result = adapter.classify(text).await.unwrap();

        assert_eq!(result.sentiment, "Positive");
        assert_eq!(result.username, "@dummy_user");
        assert_eq!(
            result.summary,
            "This is a great example tweet for testing our AI t..."
        );
    }

    #[tokio::test]
    async fn test_mock_heuristic_neutral_and_short() {
        let adapter = MockClassifier::with_delay(0);
        let result = adapter.classify("").await.unwrap();
        assert_eq!(result.sentiment, "Neutral");
        assert_eq!(result.summary, "...");
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let adapter = MockClassifier::failing("boom");
        let err = adapter.classify("x").await.unwrap_err();
        assert_eq!(err, DomainError::Classifier("boom".to_string()));
    }
}
