//! API error type and its response-envelope mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::providers::ProviderError;

const MISSING_TOPIC_MESSAGE: &str =
    "Missing 'topic' query parameter. Example usage: /api/generate?topic=new marketing agency";

const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to call Gemini API";

const MALFORMED_OUTPUT_MESSAGE: &str = "Failed to parse the generated JSON returned by the model.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing 'topic' query parameter")]
    MissingTopic,

    #[error("Upstream generation failed: {0}")]
    Upstream(#[from] ProviderError),

    #[error("Model output did not match the email contract: {source}")]
    MalformedOutput {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorEnvelope {
            success: bool,
            message: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            raw_response: Option<String>,
        }

        let (status, message, error, raw_response) = match self {
            ApiError::MissingTopic => (
                StatusCode::BAD_REQUEST,
                MISSING_TOPIC_MESSAGE.to_string(),
                None,
                None,
            ),
            ApiError::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_FAILURE_MESSAGE.to_string(),
                Some(e.to_string()),
                None,
            ),
            ApiError::MalformedOutput { raw, .. } => (
                StatusCode::BAD_GATEWAY,
                MALFORMED_OUTPUT_MESSAGE.to_string(),
                None,
                Some(raw),
            ),
        };

        (
            status,
            Json(ErrorEnvelope {
                success: false,
                message,
                error,
                raw_response,
            }),
        )
            .into_response()
    }
}
