use std::sync::Arc;

use crate::config::Config;
use crate::whisper::WhisperClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub whisper: Arc<WhisperClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // One connection pool shared by audio downloads and the upstream API.
        let http = reqwest::Client::new();
        let whisper = Arc::new(WhisperClient::new(
            http,
            config.whisper.api_url.clone(),
            config.whisper.api_key.clone(),
        ));

        Self { config, whisper }
    }
}
