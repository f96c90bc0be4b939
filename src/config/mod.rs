use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Display name carried in the collection webhook payload.
    #[serde(default = "default_unset")]
    pub title: String,
    /// Personality fragment embedded in the generation prompt.
    #[serde(default = "default_unset")]
    pub personality: String,
    /// Webhook target for the periodic publisher.
    #[serde(default = "default_post_endpoint")]
    pub post_endpoint: String,
    /// HTTP listener port (0 = random port for testing).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Gemini API key. An empty key makes generation fail at startup.
    #[serde(default)]
    pub google_api_key: String,
    /// Gemini model used for joke generation.
    #[serde(default = "default_genai_model")]
    pub genai_model: String,
    /// Which payload shape the publisher sends.
    #[serde(default)]
    pub webhook_payload: PayloadShape,
    /// Seconds between publish cycles.
    #[serde(default = "default_publish_interval_secs")]
    pub publish_interval_secs: u64,
}

/// Outbound webhook payload shape. One explicit choice per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadShape {
    /// `{"collectionName": ..., "data": {"name", "message", "timestamp"}}`
    #[default]
    Collection,
    /// `{"joke": ...}`
    Simple,
}

fn default_unset() -> String {
    "unset".to_string()
}

fn default_post_endpoint() -> String {
    "https://agent-fleet-ui.web.app/api/webhook".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_genai_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_publish_interval_secs() -> u64 {
    5
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn publish_interval(&self) -> Duration {
        Duration::from_secs(self.publish_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config: AppConfig = serde_json::from_value(json!({})).unwrap();

        assert_eq!(config.title, "unset");
        assert_eq!(config.personality, "unset");
        assert_eq!(
            config.post_endpoint,
            "https://agent-fleet-ui.web.app/api/webhook"
        );
        assert_eq!(config.port, 5000);
        assert_eq!(config.genai_model, "gemini-1.5-flash");
        assert_eq!(config.webhook_payload, PayloadShape::Collection);
        assert_eq!(config.publish_interval_secs, 5);
    }

    #[test]
    fn payload_shape_parses_from_lowercase_names() {
        let config: AppConfig =
            serde_json::from_value(json!({ "webhook_payload": "simple" })).unwrap();
        assert_eq!(config.webhook_payload, PayloadShape::Simple);
    }
}
