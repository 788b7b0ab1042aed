//! Cold-email generation endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ApiError;
use crate::models::{email_schema, GeneratedEmail};
use crate::services::metrics;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    pub topic: Option<String>,
}

/// Envelope for a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub topic: String,
    pub generated_data: GeneratedEmail,
}

fn build_prompt(product_name: &str, topic: &str) -> String {
    format!(
        "Generate a cold email, including the subject line and body, for a lead generation tool \
         named {product_name}, targeting a lead in the industry: \"{topic}\". Ensure the tone is \
         professional and focuses on solving a pain point specific to that industry."
    )
}

/// Generate a cold-email package for the given industry topic.
///
/// The model is pinned to the [`GeneratedEmail`] shape via a response
/// schema. Output that still fails to parse comes back as a 502 carrying
/// the raw model text.
pub async fn generate_email(
    State(state): State<AppState>,
    query: Option<Query<GenerateQuery>>,
) -> Result<(StatusCode, Json<GenerateResponse>), ApiError> {
    // A query the extractor cannot read (e.g. repeated parameters) counts
    // as a missing topic
    let topic = query
        .as_ref()
        .and_then(|query| query.topic.as_deref())
        .map(str::trim)
        .unwrap_or_default();

    if topic.is_empty() {
        metrics::record_generation("bad_request");
        return Err(ApiError::MissingTopic);
    }

    let product_name = &state.config.generation.product_name;
    let model = &state.config.google.model;

    let prompt = build_prompt(product_name, topic);
    let params = GenerationParams {
        temperature: state.config.generation.temperature,
        max_output_tokens: state.config.generation.max_output_tokens,
        response_schema: Some(email_schema(product_name)),
    };

    tracing::info!(
        topic = %topic,
        model = %model,
        prompt_len = prompt.len(),
        "Requesting cold email generation"
    );

    let started = Instant::now();
    let result = state.text_provider.generate(&prompt, &params).await;
    metrics::record_provider_latency(model, started.elapsed().as_secs_f64());

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, topic = %topic, "Gemini call failed");
            metrics::record_provider_error(e.error_type());
            metrics::record_generation("upstream_error");
            return Err(ApiError::Upstream(e));
        }
    };

    metrics::record_tokens(model, response.input_tokens, response.output_tokens);

    let email: GeneratedEmail = match serde_json::from_str(&response.text) {
        Ok(email) => email,
        Err(e) => {
            tracing::error!(
                error = %e,
                raw = %response.text,
                topic = %topic,
                "Model output failed the email contract"
            );
            metrics::record_generation("malformed_output");
            return Err(ApiError::MalformedOutput {
                raw: response.text,
                source: e,
            });
        }
    };

    metrics::record_generation("success");

    tracing::info!(
        topic = %topic,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = ?response.finish_reason,
        "Cold email generated"
    );

    Ok((
        StatusCode::OK,
        Json(GenerateResponse {
            success: true,
            topic: topic.to_string(),
            generated_data: email,
        }),
    ))
}
