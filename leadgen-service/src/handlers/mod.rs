//! HTTP handlers.

pub mod generate;
pub mod health;
pub mod metrics;
