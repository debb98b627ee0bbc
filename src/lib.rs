//! HTTP relay that forwards audio transcription requests to an upstream
//! whisper API. Callers POST either a remote audio URL or a base64 payload;
//! the relay resolves the bytes, submits them as a multipart form, and
//! returns the transcribed text.

pub mod audio;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod whisper;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
