//! Result shape checks. Canonical record validation and reference validation.

use crate::domain::{AnalysisResult, DomainError};

/// Returns the trimmed reference, or `None` when it is empty or whitespace-only.
pub fn normalize_reference(reference: &str) -> Option<&str> {
    let trimmed = reference.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Checks a complete record before it is persisted.
///
/// Only `username` is required; `sentiment` may hold any label, `content` and `summary` may be empty.
pub fn validate_record(record: &AnalysisResult) -> Result<(), DomainError> {
    if record.username.trim().is_empty() {
        return Err(DomainError::Shape("username must not be empty".to_string()));
    }
    Ok(())
}
