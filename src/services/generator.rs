//! Startup joke generation: one provider call, split on pipes.

use crate::error::AppError;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;

/// Number of jokes requested from the model per generation call.
const JOKE_COUNT: usize = 20;

pub struct JokeGenerator {
    provider: Arc<dyn TextProvider>,
    personality: String,
}

impl JokeGenerator {
    pub fn new(provider: Arc<dyn TextProvider>, personality: &str) -> Self {
        Self {
            provider,
            personality: personality.to_string(),
        }
    }

    fn prompt(&self) -> String {
        format!(
            "Your personality is: {}. Provide a list of {} '|' (pipe) separated jokes \
             tightly in line with the personality. Format: joke1|joke2|joke3|joke4| ...",
            self.personality, JOKE_COUNT
        )
    }

    /// Ask the model for a batch of jokes and split its answer on `|`.
    ///
    /// A response without text is an error like any other provider failure;
    /// the caller decides whether that is fatal.
    pub async fn generate(&self) -> Result<Vec<String>, AppError> {
        let params = GenerationParams {
            temperature: Some(1.0),
            ..Default::default()
        };

        let response = self.provider.generate(&self.prompt(), &params).await?;

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Joke generation completed"
        );

        let text = response
            .text
            .ok_or_else(|| ProviderError::ApiError("model returned no text".to_string()))?;

        Ok(split_jokes(&text))
    }
}

/// Split a pipe-delimited batch into individual jokes.
///
/// No trimming, no deduplication, no count validation: empty segments are
/// kept as-is, exactly as the model returned them.
pub fn split_jokes(text: &str) -> Vec<String> {
    text.split('|').map(str::to_string).collect()
}
