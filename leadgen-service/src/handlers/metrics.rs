use axum::response::IntoResponse;

/// Prometheus metrics endpoint.
pub async fn metrics() -> impl IntoResponse {
    crate::services::metrics::get_metrics()
}
