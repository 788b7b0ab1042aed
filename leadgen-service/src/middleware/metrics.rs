use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::services::metrics;

/// Record count and duration for every HTTP request.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    metrics::record_http_request(&method, &path, &status, start.elapsed().as_secs_f64());

    response
}
