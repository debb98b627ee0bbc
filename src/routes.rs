use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::audio;
use crate::error::RelayError;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/transcribe",
            post(transcribe_audio).fallback(method_not_allowed),
        )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeRequest {
    pub audio_url: Option<String>,
    pub audio_data: Option<String>,
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "api_key_configured": state.config.whisper.api_key.is_some(),
    }))
}

// Preflight OPTIONS never reaches this: the CORS layer answers it first.
async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed", "success": false })),
    )
}

async fn transcribe_audio(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> Result<Json<Value>, RelayError> {
    info!("Received transcription request");

    // Empty strings count as absent; a URL wins when both are supplied.
    let audio_url = request.audio_url.as_deref().filter(|s| !s.is_empty());
    let audio_data = request.audio_data.as_deref().filter(|s| !s.is_empty());

    let audio = match (audio_url, audio_data) {
        (Some(url), _) => state.whisper.fetch_audio(url).await?,
        (None, Some(data)) => audio::decode_base64_audio(data)?,
        (None, None) => return Err(RelayError::NoAudio),
    };

    let text = state.whisper.transcribe(audio).await.map_err(|e| {
        error!("Transcription failed: {}", e);
        e
    })?;

    info!(text_len = text.len(), "Transcription successful");

    Ok(Json(json!({ "transcription": text, "success": true })))
}
