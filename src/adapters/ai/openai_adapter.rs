//! OpenAI-compatible sentiment classifier.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `SentimentClassifier` with robust JSON parsing and markdown stripping.

use crate::domain::{Classification, DomainError};
use crate::ports::SentimentClassifier;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Author placeholder when the model cannot tell who wrote the post.
const UNKNOWN_AUTHOR: &str = "@unknown";

/// OpenAI-compatible classifier.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiClassifier {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClassifier {
    /// Create a new classifier.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `timeout` - Per-request timeout; expiry is reported as a classifier fault
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    fn system_prompt() -> &'static str {
        r#"You classify the sentiment of a single social-media post.

## Output Format
You MUST respond with valid JSON only. No markdown, no explanations outside JSON.

```json
{
  "sentiment": "Positive|Negative|Neutral",
  "summary": "One short sentence condensing the post",
  "username": "@author handle if it appears in the post, otherwise null"
}
```

Use exactly one of Positive, Negative or Neutral. Keep the summary under 60 characters."#
    }

    fn user_prompt(content: &str) -> String {
        format!("Classify the following post.\n\n{}", content)
    }

    /// Sanitize JSON response from LLM.
    ///
    /// LLMs sometimes wrap JSON in markdown code blocks. This strips them.
    fn sanitize_json(raw_text: &str) -> String {
        let trimmed = raw_text.trim();

        if let Some(rest) = trimmed.strip_prefix("```") {
            let body = rest.strip_prefix("json").unwrap_or(rest);
            return match body.rfind("```") {
                Some(end) => body[..end].trim().to_string(),
                None => body.trim().to_string(),
            };
        }

        if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
            if start < end {
                return trimmed[start..=end].to_string();
            }
        }

        trimmed.to_string()
    }

    fn to_classification(parsed: LlmClassification) -> Classification {
        let username = parsed
            .username
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        Classification {
            sentiment: parsed.sentiment.unwrap_or_default(),
            summary: parsed.summary.unwrap_or_default(),
            username,
            datetime: Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

/// Parsed LLM response. Missing fields are tolerated; the label is stored as returned.
#[derive(Deserialize)]
struct LlmClassification {
    sentiment: Option<String>,
    summary: Option<String>,
    username: Option<String>,
}

#[async_trait::async_trait]
impl SentimentClassifier for OpenAiClassifier {
    async fn classify(&self, content: &str) -> Result<Classification, DomainError> {
        info!(
            content_len = content.len(),
            model = %self.model,
            "sending post to AI for classification"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::user_prompt(content),
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Classifier(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Classifier(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Classifier(format!("Failed to parse API response: {}", e)))?;

        let raw_content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| DomainError::Classifier("No response choices returned".to_string()))?;

        debug!(raw_len = raw_content.len(), "received AI response");

        let clean_json = Self::sanitize_json(&raw_content);
        let parsed: LlmClassification = serde_json::from_str(&clean_json).map_err(|e| {
            warn!(error = %e, json = %clean_json.chars().take(200).collect::<String>(), "JSON parse failed");
            DomainError::Classifier(format!("Failed to parse LLM JSON: {}", e))
        })?;

        let classification = Self::to_classification(parsed);
        info!(sentiment = %classification.sentiment, "AI classification complete");
        Ok(classification)
    }
}
