//! Text rendering of status lines, result card, history panel and stats panel.

use crate::domain::display::{SentimentClass, format_datetime, sentiment_class, time_ago};
use crate::domain::{AnalysisResult, HistoryStore, Stats};
use crate::usecases::{StatusKind, StatusMessage};
use chrono::{DateTime, Utc};
use crossterm::style::Stylize;

const RULE: &str = "────────────────────────────────────────";

/// Colored sentiment badge, e.g. "↑ Positive". Shows the stored label verbatim.
pub fn badge(label: &str) -> String {
    let class = sentiment_class(Some(label));
    let text = if label.is_empty() {
        format!("{} Neutral", class.arrow())
    } else {
        format!("{} {}", class.arrow(), label)
    };
    match class {
        SentimentClass::Positive => text.green().bold().to_string(),
        SentimentClass::Negative => text.red().bold().to_string(),
        SentimentClass::Neutral => text.grey().bold().to_string(),
    }
}

pub fn render_status(status: &StatusMessage) -> String {
    match status.kind {
        StatusKind::Loading => format!("… {}", status.message).cyan().to_string(),
        StatusKind::Success => format!("✓ {}", status.message).green().to_string(),
        StatusKind::Error => format!("✕ {}", status.message).red().to_string(),
    }
}

/// Result card for a freshly completed analysis.
pub fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Analysis Results".bold()));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{:<10} {}\n", "Username", result.username));
    out.push_str(&format!("{:<10} {}\n", "Sentiment", badge(&result.sentiment)));
    out.push_str(&format!("{:<10} {}\n", "Summary", result.summary));
    out.push_str(&format!(
        "{:<10} {}\n",
        "Analyzed",
        format_datetime(result.datetime)
    ));
    out
}

/// Recent analyses panel, newest first.
pub fn render_history(history: &HistoryStore, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Recent Analyses".bold()));
    out.push_str(RULE);
    out.push('\n');

    if history.is_empty() {
        out.push_str("No analyses yet. Submit a tweet URL to see results here.\n");
        return out;
    }

    for item in history.iter() {
        out.push_str(&format!(
            "{}  {}\n    {}  {}\n",
            item.username.as_str().bold(),
            item.summary,
            badge(&item.sentiment),
            time_ago(item.datetime, now).dark_grey()
        ));
    }
    out
}

/// Session statistics panel.
pub fn render_stats(stats: Stats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Session Stats".bold()));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{:<10} {}\n", "Analyzed", stats.total));
    out.push_str(&format!(
        "{:<10} {}\n",
        "Positive",
        stats.positive.to_string().green()
    ));
    out.push_str(&format!(
        "{:<10} {}\n",
        "Negative",
        stats.negative.to_string().red()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn item(username: &str, sentiment: &str, datetime: DateTime<Utc>) -> AnalysisResult {
        AnalysisResult {
            username: username.to_string(),
            content: "content".to_string(),
            sentiment: sentiment.to_string(),
            summary: "summary...".to_string(),
            datetime,
        }
    }

    #[test]
    fn test_badge_keeps_label_and_arrow() {
        assert!(badge("Positive").contains("↑ Positive"));
        assert!(badge("negative").contains("↓ negative"));
        assert!(badge("meh").contains("→ meh"));
        assert!(badge("").contains("→ Neutral"));
    }

    #[test]
    fn test_render_history_empty_and_ordered() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let mut history = HistoryStore::new();
        assert!(render_history(&history, now).contains("No analyses yet"));

        history.commit(item("@old", "Neutral", now - Duration::seconds(7200)));
        history.commit(item("@new", "Positive", now - Duration::seconds(300)));
        let text = render_history(&history, now);

        let new_at = text.find("@new").unwrap();
        let old_at = text.find("@old").unwrap();
        assert!(new_at < old_at);
        assert!(text.contains("5m ago"));
        assert!(text.contains("2h ago"));
    }

    #[test]
    fn test_render_result_and_stats() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 0).unwrap();
        let card = render_result(&item("@u", "Positive", dt));
        assert!(card.contains("@u"));
        assert!(card.contains("summary..."));
        assert!(card.contains("Jan 5, 2024, 3:04 PM"));

        let stats = render_stats(Stats {
            total: 3,
            positive: 2,
            negative: 1,
        });
        assert!(stats.contains("Analyzed"));
        assert!(stats.contains('3'));
    }

    #[test]
    fn test_render_status_kinds() {
        let s = StatusMessage {
            kind: StatusKind::Error,
            message: "Please enter a tweet URL".to_string(),
        };
        assert!(render_status(&s).contains("✕ Please enter a tweet URL"));
    }
}
