//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers::get_joke;
use crate::services::providers::TextProvider;
use crate::services::{JokeGenerator, JokeStore, WebhookPublisher};
use axum::{routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<JokeStore>,
}

/// Build the HTTP router: a single route, matched for any method.
pub fn app_router(state: AppState) -> Router {
    Router::new().route("/", any(get_joke)).with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    publisher: WebhookPublisher,
    shutdown: CancellationToken,
}

impl Application {
    /// Build the application with the given configuration and text provider.
    ///
    /// Generates the initial joke list before binding the listener; a
    /// generation failure surfaces here and the caller decides whether it
    /// is fatal.
    pub async fn build(
        config: AppConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let generator = JokeGenerator::new(provider, &config.personality);
        let jokes = generator.generate().await.map_err(|e| {
            tracing::error!("Failed to generate jokes: {}", e);
            e
        })?;

        tracing::info!(count = jokes.len(), "Generated initial joke list");
        let store = Arc::new(JokeStore::new(jokes));

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let shutdown = CancellationToken::new();
        let publisher = WebhookPublisher::new(
            &config.post_endpoint,
            &config.title,
            config.webhook_payload,
            config.publish_interval(),
            store.clone(),
            shutdown.clone(),
        );

        let state = AppState { config, store };

        Ok(Self {
            port,
            listener,
            state,
            publisher,
            shutdown,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Token that stops the publisher task; used by tests. Production has
    /// no shutdown path and never cancels it.
    pub fn shutdown_handle(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Run the application until the listener exits.
    ///
    /// Spawns the publisher as a background task, then serves HTTP.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tokio::spawn(self.publisher.run());

        tracing::info!("Server started at :{}", self.port);

        let router = app_router(self.state);
        axum::serve(self.listener, router).await.map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })
    }
}
