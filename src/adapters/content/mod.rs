//! Content source adapters. Implement ContentSource.

pub mod placeholder;

pub use placeholder::PlaceholderContentSource;
