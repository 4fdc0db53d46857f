//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives analysis requests.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop (prompt for a reference, analyze, render session) until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
