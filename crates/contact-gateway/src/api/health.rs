//! Liveness and metrics endpoints.

use super::AppState;
use axum::{extract::State, response::IntoResponse, Json};

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "contact-gateway",
        "version": crate::VERSION
    }))
}

/// Metrics snapshot endpoint
pub async fn metrics_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.to_json())
}
