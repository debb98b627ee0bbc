use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;

use crate::error::RelayError;

// Browsers hand us recordings as data URLs; only these two markers are
// recognized, anything else is treated as plain base64.
fn data_url_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"^data:(?:audio/\w+|application/octet-stream);base64,").unwrap()
    })
}

/// Decode a base64 audio payload, stripping a leading data-URL marker if
/// present.
pub fn decode_base64_audio(audio_data: &str) -> Result<Vec<u8>, RelayError> {
    let stripped = data_url_marker().replace(audio_data, "");
    Ok(STANDARD.decode(stripped.as_bytes())?)
}
