use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::RelayError;

/// Client for the upstream whisper transcription API.
#[derive(Debug, Clone)]
pub struct WhisperClient {
    http: Client,
    api_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
}

impl WhisperClient {
    pub fn new(http: Client, api_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            api_url,
            api_key,
        }
    }

    /// Download raw audio bytes from a caller-supplied source URL.
    pub async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>, RelayError> {
        debug!("Downloading audio from {}", url);
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(RelayError::AudioFetch {
                status: response.status(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Submit audio bytes as a multipart form and return the transcribed
    /// text. No retries or timeouts; a single failure surfaces immediately.
    pub async fn transcribe(&self, audio: Vec<u8>) -> Result<String, RelayError> {
        let api_key = self.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;

        debug!(audio_bytes = audio.len(), "Calling whisper API at {}", self.api_url);

        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(audio)
                .file_name("audio.mp3")
                .mime_str("audio/mp3")?,
        );

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        debug!("Whisper API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream { status, body });
        }

        let parsed: WhisperResponse = response.json().await?;
        Ok(parsed.text)
    }
}
