use joke_service::config::AppConfig;
use joke_service::observability::init_tracing;
use joke_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use joke_service::services::providers::TextProvider;
use joke_service::startup::Application;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let config = AppConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let gemini_config = GeminiConfig {
        api_key: config.google_api_key.clone(),
        model: config.genai_model.clone(),
    };
    let provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

    tracing::info!(model = %config.genai_model, "Initialized Gemini text provider");

    // Any generation failure is fatal: no jokes, no service.
    let app = Application::build(config, provider).await.map_err(|e| {
        tracing::error!("Failed to start: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
