//! Periodic webhook publisher.
//!
//! Runs as a background task: each cycle draws one random joke from the
//! store and POSTs it to the configured webhook. Failures are logged and
//! dropped; the next attempt happens only on the next tick.

use crate::config::PayloadShape;
use crate::services::store::JokeStore;
use chrono::Utc;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Fixed collection identifier for the collection payload shape.
const COLLECTION_NAME: &str = "pings-gccd-indore";

pub struct WebhookPublisher {
    client: Client,
    endpoint: String,
    title: String,
    shape: PayloadShape,
    interval: Duration,
    store: Arc<JokeStore>,
    shutdown: CancellationToken,
}

impl WebhookPublisher {
    pub fn new(
        endpoint: &str,
        title: &str,
        shape: PayloadShape,
        interval: Duration,
        store: Arc<JokeStore>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            title: title.to_string(),
            shape,
            interval,
            store,
            shutdown,
        }
    }

    /// Run the publish loop until the cancellation token fires.
    ///
    /// The first cycle runs immediately; each interval window after that
    /// contains exactly one cycle.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Publisher shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    self.publish_once().await;
                }
            }
        }
    }

    /// One publish cycle. The store lock is released before any network I/O.
    async fn publish_once(&self) {
        let Some(joke) = self.store.random() else {
            tracing::info!("No joke found");
            return;
        };

        let payload = build_payload(self.shape, &self.title, &joke, Utc::now().timestamp_millis());

        match self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::info!(joke = %joke, "Successfully posted joke");
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Failed to post joke");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to post joke");
            }
        }
    }
}

fn build_payload(shape: PayloadShape, title: &str, joke: &str, timestamp_ms: i64) -> serde_json::Value {
    match shape {
        PayloadShape::Collection => json!({
            "collectionName": COLLECTION_NAME,
            "data": {
                "name": title,
                "message": escape_newlines(joke),
                "timestamp": timestamp_ms,
            }
        }),
        PayloadShape::Simple => json!({ "joke": joke }),
    }
}

/// Replace every literal newline with the two-character sequence `\n`.
fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_each_newline() {
        assert_eq!(escape_newlines("a\nb\nc"), "a\\nb\\nc");
    }

    #[test]
    fn escape_leaves_newline_free_input_unchanged() {
        assert_eq!(escape_newlines("no newlines here"), "no newlines here");
    }

    #[test]
    fn collection_payload_carries_title_message_and_timestamp() {
        let payload = build_payload(
            PayloadShape::Collection,
            "Bot",
            "why did the chicken cross the road?",
            1234,
        );

        assert_eq!(payload["collectionName"], COLLECTION_NAME);
        assert_eq!(payload["data"]["name"], "Bot");
        assert_eq!(
            payload["data"]["message"],
            "why did the chicken cross the road?"
        );
        assert_eq!(payload["data"]["timestamp"], 1234);
    }

    #[test]
    fn collection_payload_escapes_newlines_in_the_message() {
        let payload = build_payload(PayloadShape::Collection, "Bot", "line1\nline2", 0);
        assert_eq!(payload["data"]["message"], "line1\\nline2");
    }

    #[test]
    fn simple_payload_has_a_single_unescaped_joke_field() {
        let payload = build_payload(PayloadShape::Simple, "Bot", "a \"quoted\"\njoke", 0);
        assert_eq!(payload, json!({ "joke": "a \"quoted\"\njoke" }));
    }
}
