//! HTTP persistence gateway. POSTs each record as flat JSON to the analysis API.

use crate::domain::{AnalysisResult, DomainError};
use crate::ports::PersistenceGateway;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default endpoint of the analysis API.
pub const DEFAULT_PERSIST_URL: &str = "http://localhost:5000/api/analyze";

/// Persistence gateway backed by a REST endpoint.
///
/// Transport errors, timeouts and non-2xx responses are all reported as `DomainError::Persistence`.
pub struct HttpPersistenceGateway {
    client: Client,
    url: String,
}

impl HttpPersistenceGateway {
    /// Create a gateway posting to `url`. `timeout` bounds each request.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl PersistenceGateway for HttpPersistenceGateway {
    async fn persist(&self, record: &AnalysisResult) -> Result<(), DomainError> {
        let res = self
            .client
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|e| DomainError::Persistence(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            warn!(status = %status, "analysis API rejected record");
            return Err(DomainError::Persistence(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        debug!(url = %self.url, username = %record.username, "record persisted");
        Ok(())
    }
}
