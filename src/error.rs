use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures the relay can hit while handling a transcription request.
///
/// Every variant surfaces to the caller as a flat JSON body
/// `{ "error": <message>, "success": false }`. Nothing is retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Whisper API key not configured")]
    MissingApiKey,

    #[error("No audio data provided")]
    NoAudio,

    /// The audio source URL answered with a non-success status.
    #[error("Failed to download audio: {status}")]
    AudioFetch { status: reqwest::StatusCode },

    /// The transcription API answered with a non-success status.
    #[error("Whisper API error: {status} - {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid base64 audio data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::NoAudio => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": self.to_string(),
            "success": false,
        }));
        (status, body).into_response()
    }
}
