//! HTTP handlers for the joke service.

use crate::startup::AppState;
use axum::extract::State;

/// Serve one random stored joke as plain text.
///
/// Always responds 200: an empty store degrades to a fixed fallback body
/// rather than an error status.
pub async fn get_joke(State(state): State<AppState>) -> String {
    state
        .store
        .random()
        .unwrap_or_else(|| "No joke found.".to_string())
}
