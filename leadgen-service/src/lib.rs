//! Lead-generation microservice.
//!
//! Wraps Gemini's `generateContent` endpoint behind a single GET endpoint
//! that drafts a schema-constrained cold email for a target industry.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
