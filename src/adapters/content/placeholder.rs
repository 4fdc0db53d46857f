//! Placeholder content source. Resolves every reference to a fixed example text.
//!
//! Fetching real post bodies needs platform API credentials, which this tool does not manage.

use crate::domain::DomainError;
use crate::ports::ContentSource;
use tracing::debug;

pub struct PlaceholderContentSource {
    text: String,
}

impl PlaceholderContentSource {
    pub const DEFAULT_TEXT: &'static str =
        "This is a great example tweet for testing our AI tool.";

    pub fn new() -> Self {
        Self::with_text(Self::DEFAULT_TEXT)
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for PlaceholderContentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ContentSource for PlaceholderContentSource {
    async fn fetch(&self, reference: &str) -> Result<String, DomainError> {
        debug!(reference, "resolving reference to placeholder text");
        Ok(self.text.clone())
    }
}
