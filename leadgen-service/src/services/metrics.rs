//! Prometheus metrics for leadgen-service.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

// HTTP metrics
pub static HTTP_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static HTTP_REQUEST_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();

// Generation metrics
pub static LEADGEN_GENERATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static LEADGEN_PROVIDER_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static LEADGEN_PROVIDER_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static LEADGEN_TOKENS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup.
pub fn init_metrics() {
    let registry = Registry::new();

    let http_requests_total = IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests"),
        &["method", "path", "status"],
    )
    .expect("Failed to create http_requests_total metric");

    let http_request_duration = HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["method", "path", "status"],
    )
    .expect("Failed to create http_request_duration_seconds metric");

    let generations = IntCounterVec::new(
        Opts::new(
            "leadgen_generations_total",
            "Generation requests by outcome",
        ),
        &["outcome"], // success, bad_request, upstream_error, malformed_output
    )
    .expect("Failed to create leadgen_generations_total metric");

    let provider_latency = HistogramVec::new(
        HistogramOpts::new(
            "leadgen_provider_latency_seconds",
            "Gemini API call latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["model"],
    )
    .expect("Failed to create leadgen_provider_latency_seconds metric");

    let provider_errors = IntCounterVec::new(
        Opts::new(
            "leadgen_provider_errors_total",
            "Gemini API errors by type",
        ),
        &["error_type"],
    )
    .expect("Failed to create leadgen_provider_errors_total metric");

    let tokens = IntCounterVec::new(
        Opts::new("leadgen_tokens_total", "Tokens processed"),
        &["model", "type"], // type: input, output
    )
    .expect("Failed to create leadgen_tokens_total metric");

    registry
        .register(Box::new(http_requests_total.clone()))
        .expect("Failed to register http_requests_total");
    registry
        .register(Box::new(http_request_duration.clone()))
        .expect("Failed to register http_request_duration_seconds");
    registry
        .register(Box::new(generations.clone()))
        .expect("Failed to register leadgen_generations_total");
    registry
        .register(Box::new(provider_latency.clone()))
        .expect("Failed to register leadgen_provider_latency_seconds");
    registry
        .register(Box::new(provider_errors.clone()))
        .expect("Failed to register leadgen_provider_errors_total");
    registry
        .register(Box::new(tokens.clone()))
        .expect("Failed to register leadgen_tokens_total");

    let _ = REGISTRY.set(registry);
    let _ = HTTP_REQUESTS_TOTAL.set(http_requests_total);
    let _ = HTTP_REQUEST_DURATION_SECONDS.set(http_request_duration);
    let _ = LEADGEN_GENERATIONS_TOTAL.set(generations);
    let _ = LEADGEN_PROVIDER_LATENCY_SECONDS.set(provider_latency);
    let _ = LEADGEN_PROVIDER_ERRORS_TOTAL.set(provider_errors);
    let _ = LEADGEN_TOKENS_TOTAL.set(tokens);

    tracing::info!("Prometheus metrics initialized");
}

/// Render the registry in the Prometheus text exposition format.
pub fn get_metrics() -> String {
    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => return "# Metrics registry not initialized\n".to_string(),
    };

    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_default()
}

// Helper functions for recording metrics

pub fn record_http_request(method: &str, path: &str, status: &str, duration_secs: f64) {
    if let Some(counter) = HTTP_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[method, path, status]).inc();
    }
    if let Some(histogram) = HTTP_REQUEST_DURATION_SECONDS.get() {
        histogram
            .with_label_values(&[method, path, status])
            .observe(duration_secs);
    }
}

pub fn record_generation(outcome: &str) {
    if let Some(counter) = LEADGEN_GENERATIONS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

pub fn record_provider_latency(model: &str, duration_secs: f64) {
    if let Some(histogram) = LEADGEN_PROVIDER_LATENCY_SECONDS.get() {
        histogram.with_label_values(&[model]).observe(duration_secs);
    }
}

pub fn record_provider_error(error_type: &str) {
    if let Some(counter) = LEADGEN_PROVIDER_ERRORS_TOTAL.get() {
        counter.with_label_values(&[error_type]).inc();
    }
}

pub fn record_tokens(model: &str, input_tokens: i32, output_tokens: i32) {
    if let Some(counter) = LEADGEN_TOKENS_TOTAL.get() {
        counter
            .with_label_values(&[model, "input"])
            .inc_by(input_tokens as u64);
        counter
            .with_label_values(&[model, "output"])
            .inc_by(output_tokens as u64);
    }
}
