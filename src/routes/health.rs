//! Health check endpoint for container orchestration.
//!
//! Reports whether the recommendation table loaded at startup. A degraded
//! service (failed load) answers 503 with the original load error so probes
//! and operators see the same message every lookup request gets.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;
use crate::table::TableState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.table.as_ref() {
        TableState::Available(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                error: None,
            }),
        ),
        TableState::Degraded(message) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "degraded",
                error: Some(message.clone()),
            }),
        ),
    }
}
