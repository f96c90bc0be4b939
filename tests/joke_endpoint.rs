//! Integration tests for the HTTP surface.
//!
//! These tests build the application with the mock text provider and drive
//! the real listener on a random port.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use joke_service::config::{AppConfig, PayloadShape};
use joke_service::services::providers::mock::MockTextProvider;
use joke_service::services::JokeStore;
use joke_service::startup::{app_router, AppState, Application};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn test_config() -> AppConfig {
    AppConfig {
        title: "Bot".to_string(),
        personality: "dry".to_string(),
        // Unroutable endpoint; the publisher is effectively idle in these tests.
        post_endpoint: "http://127.0.0.1:9/webhook".to_string(),
        port: 0,
        google_api_key: String::new(),
        genai_model: "gemini-1.5-flash".to_string(),
        webhook_payload: PayloadShape::Collection,
        publish_interval_secs: 3600,
    }
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app(canned_response: &str) -> u16 {
    let provider = Arc::new(MockTextProvider::new(canned_response));
    let app = Application::build(test_config(), provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn get_returns_one_of_the_generated_jokes() {
    let port = spawn_app("first|second|third").await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert!(["first", "second", "third"].contains(&body.as_str()));
}

#[tokio::test]
async fn any_method_is_served_on_the_joke_route() {
    let port = spawn_app("first|second|third").await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert!(["first", "second", "third"].contains(&body.as_str()));
}

#[tokio::test]
async fn single_joke_store_always_returns_that_joke() {
    let port = spawn_app("the only joke").await;
    let client = Client::new();

    for _ in 0..10 {
        let body = client
            .get(format!("http://localhost:{}/", port))
            .send()
            .await
            .expect("Failed to send request")
            .text()
            .await
            .expect("Failed to read body");

        assert_eq!(body, "the only joke");
    }
}

#[tokio::test]
async fn concurrent_requests_do_not_deadlock() {
    let port = spawn_app("a|b|c|d").await;
    let client = Client::new();

    let url = format!("http://localhost:{}/", port);
    let (r1, r2, r3, r4) = tokio::join!(
        client.get(&url).send(),
        client.get(&url).send(),
        client.get(&url).send(),
        client.get(&url).send(),
    );

    for response in [r1, r2, r3, r4] {
        let body = response
            .expect("Failed to send request")
            .text()
            .await
            .expect("Failed to read body");
        assert!(["a", "b", "c", "d"].contains(&body.as_str()));
    }
}

#[tokio::test]
async fn empty_store_returns_the_fallback_text() {
    let state = AppState {
        config: test_config(),
        store: Arc::new(JokeStore::empty()),
    };

    let response = app_router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"No joke found.");
}

#[tokio::test]
async fn build_fails_when_the_provider_fails() {
    let provider = Arc::new(MockTextProvider::disabled());
    let result = Application::build(test_config(), provider).await;
    assert!(result.is_err());
}
