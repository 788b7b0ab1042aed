//! Text generation provider abstraction.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiConfig, GeminiTextProvider};
pub use mock::MockTextProvider;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Provider API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered by the provider")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Stable label for the provider error counter.
    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered => "content_filtered",
            ProviderError::NetworkError(_) => "network_error",
        }
    }
}

/// A completed generation.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Text returned by the model. With a response schema attached this is
    /// a JSON document, though the model is not guaranteed to honor that.
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

/// Tuning knobs forwarded with each generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<i32>,
    /// JSON schema the model output must conform to. When set, the provider
    /// also asks for a JSON MIME type.
    pub response_schema: Option<serde_json::Value>,
}

/// Interface to a text generation backend.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for a prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Check whether the backend is reachable and credentialed.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
