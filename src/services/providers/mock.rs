//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing. Returns a canned response.
pub struct MockTextProvider {
    enabled: bool,
    response: String,
}

impl MockTextProvider {
    /// Provider that always answers with the given text.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            enabled: true,
            response: response.into(),
        }
    }

    /// Provider that fails every request, for error-path tests.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            response: String::new(),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(ProviderResponse {
            text: Some(self.response.clone()),
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: self.response.len() as i32 / 4,
            finish_reason: FinishReason::Complete,
        })
    }
}
