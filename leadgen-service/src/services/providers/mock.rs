//! In-process provider stub for tests.

use async_trait::async_trait;

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};

/// Provider that replies with a canned text or fails every call.
pub struct MockTextProvider {
    text: Option<String>,
}

impl MockTextProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        match &self.text {
            Some(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: 12,
                output_tokens: 48,
                finish_reason: FinishReason::Complete,
            }),
            None => Err(ProviderError::ApiError(
                "Mock text provider set to fail".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.text {
            Some(_) => Ok(()),
            None => Err(ProviderError::NotConfigured(
                "Mock text provider set to fail".to_string(),
            )),
        }
    }
}
