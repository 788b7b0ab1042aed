//! Service layer: metrics and the text generation provider.

pub mod metrics;
pub mod providers;
