//! tweet-insight: tweet sentiment analysis with a bounded session history, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
