//! Infrastructure adapters. Implement outbound ports.
//!
//! Classifier, content source, persistence gateway, observers, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod content;
pub mod notify;
pub mod persistence;
pub mod ui;
