//! Application configuration. Collaborator endpoints, credentials, timeouts.

use crate::adapters::persistence::DEFAULT_PERSIST_URL;
use serde::Deserialize;
use std::time::Duration;

/// Default per-request timeout for HTTP collaborators, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Analysis API endpoint receiving completed records. Read from TWEET_INSIGHT_PERSIST_URL.
    #[serde(default)]
    pub persist_url: Option<String>,

    /// Keep records in memory instead of posting them. Read from TWEET_INSIGHT_OFFLINE.
    #[serde(default)]
    pub offline: Option<bool>,

    /// Timeout for classifier and gateway requests. Read from TWEET_INSIGHT_HTTP_TIMEOUT_SECS.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,

    /// Simulated latency of the mock classifier. Read from TWEET_INSIGHT_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // AI Classifier Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key (e.g., OpenAI). Read from TWEET_INSIGHT_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from TWEET_INSIGHT_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gpt-4o-mini". Read from TWEET_INSIGHT_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TWEET_INSIGHT").try_parsing(true));
        if let Ok(path) = std::env::var("TWEET_INSIGHT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn persist_url_or_default(&self) -> String {
        self.persist_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PERSIST_URL.to_string())
    }

    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    /// Returns the HTTP timeout. Defaults to DEFAULT_HTTP_TIMEOUT_SECS; zero is treated as unset.
    pub fn http_timeout(&self) -> Duration {
        let secs = self
            .http_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Returns mock classifier delay in milliseconds. Defaults to 100.
    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(100)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the AI API key if configured and non-empty.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key.clone().filter(|k| !k.trim().is_empty())
    }

    /// Returns the AI API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the AI model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| "gpt-4o-mini".to_string())
    }

    /// Returns true if the AI classifier is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.persist_url_or_default(), "http://localhost:5000/api/analyze");
        assert_eq!(cfg.http_timeout(), Duration::from_secs(30));
        assert_eq!(cfg.mock_delay_ms_or_default(), 100);
        assert_eq!(cfg.ai_model_or_default(), "gpt-4o-mini");
        assert!(!cfg.is_offline());
        assert!(!cfg.is_ai_configured());
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let cfg = AppConfig {
            ai_api_key: Some("   ".to_string()),
            http_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(!cfg.is_ai_configured());
        assert_eq!(cfg.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_deserialize_from_map() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("persist_url", "http://example.test/api")
            .unwrap()
            .set_override("offline", true)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.persist_url_or_default(), "http://example.test/api");
        assert!(cfg.is_offline());
    }
}
