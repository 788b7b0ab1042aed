//! HTTP middleware: request IDs and per-request metrics.

pub mod metrics;
pub mod request_id;
