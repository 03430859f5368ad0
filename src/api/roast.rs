//! Roast endpoint: image in, caption text plus spoken audio out

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use base64::Engine;
use serde::Serialize;

use super::ApiState;
use crate::providers::ProviderError;
use crate::relay::{self, RelayError};

/// Build roast router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/roast", post(roast))
        .with_state(state)
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct RoastResponse {
    /// Trimmed caption text
    pub text: String,
    /// Base64-encoded MP3 audio
    #[serde(rename = "audioBase64")]
    pub audio_base64: String,
}

/// Generate a roast for a webcam frame
///
/// Body: `{ "image": "<data URL>" }`. Both provider calls must succeed;
/// there is no partial success.
async fn roast(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<RoastResponse>, RoastError> {
    let Json(body) = payload.map_err(|e| RoastError::Unexpected(e.body_text()))?;

    let image = body
        .get("image")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(RoastError::MissingImage)?;

    let provider = state.provider.as_ref().ok_or(RoastError::NotConfigured)?;

    let result = relay::run(provider.as_ref(), image).await?;

    Ok(Json(RoastResponse {
        text: result.text,
        audio_base64: base64::engine::general_purpose::STANDARD.encode(&result.audio),
    }))
}

/// Roast API errors
///
/// Every variant maps to a JSON envelope `{ "error": ..., "details"?: ... }`;
/// nothing propagates past the handler boundary.
#[derive(Debug)]
pub enum RoastError {
    /// Inbound payload missing or malformed `image`
    MissingImage,
    /// Provider credential absent from the environment
    NotConfigured,
    /// Captioning call failed upstream
    VisionUpstream(serde_json::Value),
    /// Captioning succeeded but produced no text
    EmptyRoast,
    /// Synthesis call failed upstream
    TtsUpstream(serde_json::Value),
    /// Anything else (transport failure, malformed body, parse failure)
    Unexpected(String),
}

impl From<RelayError> for RoastError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Caption(ProviderError::Upstream { details, .. }) => {
                Self::VisionUpstream(details)
            }
            RelayError::EmptyCaption => Self::EmptyRoast,
            RelayError::Synthesis(ProviderError::Upstream { details, .. }) => {
                Self::TtsUpstream(details)
            }
            RelayError::Caption(ProviderError::Request(msg))
            | RelayError::Synthesis(ProviderError::Request(msg)) => Self::Unexpected(msg),
        }
    }
}

impl IntoResponse for RoastError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<serde_json::Value>,
        }

        let (status, error, details) = match self {
            Self::MissingImage => (
                StatusCode::BAD_REQUEST,
                "Missing 'image' (data URL)",
                None,
            ),
            Self::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "OPENAI_API_KEY is not set",
                None,
            ),
            Self::VisionUpstream(details) => {
                tracing::warn!(details = %details, "vision upstream error");
                (StatusCode::BAD_GATEWAY, "OpenAI vision error", Some(details))
            }
            Self::EmptyRoast => (StatusCode::BAD_GATEWAY, "Failed to generate roast", None),
            Self::TtsUpstream(details) => {
                tracing::warn!(details = %details, "TTS upstream error");
                (StatusCode::BAD_GATEWAY, "OpenAI TTS error", Some(details))
            }
            Self::Unexpected(message) => {
                tracing::warn!(message = %message, "unexpected roast error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error",
                    Some(serde_json::Value::String(message)),
                )
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
