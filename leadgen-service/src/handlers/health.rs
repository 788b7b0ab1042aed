//! Root, liveness, and readiness endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Plain-text root pointing callers at the generate endpoint.
pub async fn index(State(state): State<AppState>) -> String {
    format!(
        "{} API is running. Use the /api/generate?topic=YOUR_TOPIC endpoint to get started.",
        state.config.generation.product_name
    )
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "leadgen-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness probe wired to the provider reachability check.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.text_provider.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
