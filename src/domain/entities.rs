//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here — adapters map their payloads into these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One completed analysis. Flat five-field record exchanged with the persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub username: String,
    pub content: String,
    /// Label exactly as returned by the classifier. Display goes through `Sentiment::from_label`.
    pub sentiment: String,
    pub summary: String,
    pub datetime: DateTime<Utc>,
}

impl AnalysisResult {
    /// Category counted in session stats. Only the exact labels count.
    pub fn counted_category(&self) -> Sentiment {
        Sentiment::from_exact(&self.sentiment)
    }
}

/// Classifier output. Content is attached by the controller before commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment: String,
    pub summary: String,
    pub username: String,
    pub datetime: DateTime<Utc>,
}

impl Classification {
    pub fn with_content(self, content: impl Into<String>) -> AnalysisResult {
        AnalysisResult {
            username: self.username,
            content: content.into(),
            sentiment: self.sentiment,
            summary: self.summary,
            datetime: self.datetime,
        }
    }
}

/// Fixed sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Case-insensitive; anything unrecognized (including empty) is `Neutral`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Exact match on `"Positive"` / `"Negative"`; every other label is `Neutral`.
    pub fn from_exact(label: &str) -> Self {
        match label {
            "Positive" => Sentiment::Positive,
            "Negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifetime counters of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_from_label_is_case_insensitive() {
        assert_eq!(Sentiment::from_label("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("NEGATIVE"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label(" positive "), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(""), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_from_exact_is_case_sensitive() {
        assert_eq!(Sentiment::from_exact("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_exact("Negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_exact("positive"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_exact("NEGATIVE"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_exact("Positive "), Sentiment::Neutral);
    }

    #[test]
    fn test_with_content_keeps_raw_label() {
        let classification = Classification {
            sentiment: "positive-ish".to_string(),
            summary: "ok...".to_string(),
            username: "@u".to_string(),
            datetime: Utc::now(),
        };
        let result = classification.with_content("hello");
        assert_eq!(result.content, "hello");
        assert_eq!(result.sentiment, "positive-ish");
        assert_eq!(result.counted_category(), Sentiment::Neutral);
    }

    #[test]
    fn test_record_serializes_flat_five_fields() {
        let result = AnalysisResult {
            username: "@u".to_string(),
            content: "text".to_string(),
            sentiment: "Positive".to_string(),
            summary: "te...".to_string(),
            datetime: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let value = serde_json::to_value(&result).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in ["username", "content", "sentiment", "summary", "datetime"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj["datetime"], "2024-01-01T00:00:00Z");
    }
}
