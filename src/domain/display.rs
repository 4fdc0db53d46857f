//! Pure presentation derivations: relative time, sentiment badge class, card timestamps.
//!
//! Dates are rendered from the UTC timestamp so output is deterministic for a fixed `now`.

use crate::domain::Sentiment;
use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Relative age of `timestamp` as seen at `now`.
///
/// Negative elapsed time (clock skew) is treated as "Just now".
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < MINUTE {
        "Just now".to_string()
    } else if seconds < HOUR {
        format!("{}m ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}h ago", seconds / HOUR)
    } else {
        timestamp.format("%-m/%-d/%Y").to_string()
    }
}

/// Display class of a sentiment badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    pub fn css_class(self) -> &'static str {
        match self {
            SentimentClass::Positive => "sentiment-positive",
            SentimentClass::Negative => "sentiment-negative",
            SentimentClass::Neutral => "sentiment-neutral",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SentimentClass::Positive => "↑",
            SentimentClass::Negative => "↓",
            SentimentClass::Neutral => "→",
        }
    }
}

impl From<Sentiment> for SentimentClass {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => SentimentClass::Positive,
            Sentiment::Negative => SentimentClass::Negative,
            Sentiment::Neutral => SentimentClass::Neutral,
        }
    }
}

/// Case-insensitive class for a stored label. `None` (absent label) is neutral.
pub fn sentiment_class(label: Option<&str>) -> SentimentClass {
    label
        .map(Sentiment::from_label)
        .unwrap_or(Sentiment::Neutral)
        .into()
}

/// Full timestamp for the result card, e.g. "Jan 5, 2024, 3:04 PM".
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y, %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
    }

    fn ago(secs: i64) -> String {
        time_ago(now() - Duration::seconds(secs), now())
    }

    #[test]
    fn test_time_ago_just_now() {
        for s in 0..60 {
            assert_eq!(ago(s), "Just now");
        }
        assert_eq!(ago(-30), "Just now");
    }

    #[test]
    fn test_time_ago_minutes_and_hours() {
        assert_eq!(ago(60), "1m ago");
        assert_eq!(ago(300), "5m ago");
        assert_eq!(ago(3599), "59m ago");
        assert_eq!(ago(3600), "1h ago");
        assert_eq!(ago(7200), "2h ago");
        assert_eq!(ago(86399), "23h ago");
    }

    #[test]
    fn test_time_ago_calendar_date() {
        // 100000s before 2024-01-10 12:00 UTC is 2024-01-09 08:13:20 UTC
        assert_eq!(ago(100_000), "1/9/2024");
        assert_eq!(ago(86_400), "1/9/2024");
    }

    #[test]
    fn test_sentiment_class() {
        assert_eq!(sentiment_class(Some("Positive")), SentimentClass::Positive);
        assert_eq!(sentiment_class(Some("pOsItIvE")), SentimentClass::Positive);
        assert_eq!(sentiment_class(Some("negative")), SentimentClass::Negative);
        assert_eq!(sentiment_class(Some("sarcastic")), SentimentClass::Neutral);
        // no trimming: padded labels are not recognized
        assert_eq!(sentiment_class(Some(" positive ")), SentimentClass::Neutral);
        assert_eq!(sentiment_class(None), SentimentClass::Neutral);
        assert_eq!(SentimentClass::Negative.css_class(), "sentiment-negative");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(format_datetime(dt), "Jan 5, 2024, 3:04 PM");
    }
}
