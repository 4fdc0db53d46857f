//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> analyze a tweet URL / show history / show stats / quit.

use crate::adapters::ui::render;
use crate::domain::{AnalysisError, DomainError};
use crate::ports::InputPort;
use crate::usecases::{AnalysisSession, RequestController};
use async_trait::async_trait;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Applies the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightMagenta));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Analyze,
    History,
    Stats,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 4] = [
        MenuItem::Analyze,
        MenuItem::History,
        MenuItem::Stats,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Analyze => "Analyze Tweet",
            MenuItem::History => "Recent Analyses",
            MenuItem::Stats => "Session Stats",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Treats Esc / Ctrl-C as "leave", everything else as a UI fault.
fn prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Owns the session for the lifetime of the interactive run.
pub struct TuiInputPort {
    controller: Arc<RequestController>,
    session: Arc<RwLock<AnalysisSession>>,
}

impl TuiInputPort {
    pub fn new(controller: Arc<RequestController>, session: Arc<RwLock<AnalysisSession>>) -> Self {
        Self {
            controller,
            session,
        }
    }

    async fn analyze(&self) -> Result<(), DomainError> {
        let reference = match Text::new("Tweet URL")
            .with_placeholder("https://twitter.com/user/status/123456789")
            .with_help_message("Paste any Twitter/X post URL to analyze its sentiment and content")
            .prompt()
        {
            Ok(r) => r,
            Err(e) if prompt_cancelled(&e) => return Ok(()),
            Err(e) => return Err(DomainError::Ui(e.to_string())),
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Analyzing...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let outcome = self.controller.submit(&self.session, &reference).await;
        spinner.finish_and_clear();

        if let Some(status) = self.controller.status() {
            println!("{}", render::render_status(&status));
        }
        match outcome {
            Ok(result) => println!("\n{}", render::render_result(&result)),
            Err(AnalysisError::Busy) => debug!("submit refused while busy"),
            Err(e) => debug!(error = %e, "analysis failed"),
        }
        Ok(())
    }

    async fn show_history(&self) {
        let session = self.session.read().await;
        println!("\n{}", render::render_history(session.history(), Utc::now()));
    }

    async fn show_stats(&self) {
        let stats = self.session.read().await.stats();
        println!("\n{}", render::render_stats(stats));
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = match Select::new("What next?", MenuItem::ALL.to_vec()).prompt() {
                Ok(c) => c,
                Err(e) if prompt_cancelled(&e) => return Ok(()),
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            match choice {
                MenuItem::Analyze => self.analyze().await?,
                MenuItem::History => self.show_history().await,
                MenuItem::Stats => self.show_stats().await,
                MenuItem::Quit => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = MenuItem::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Analyze Tweet", "Recent Analyses", "Session Stats", "Quit"]
        );
    }

    #[test]
    fn test_prompt_cancelled() {
        assert!(prompt_cancelled(&InquireError::OperationCanceled));
        assert!(prompt_cancelled(&InquireError::OperationInterrupted));
        assert!(!prompt_cancelled(&InquireError::NotTTY));
    }
}
