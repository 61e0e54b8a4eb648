use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::validate::SynthesisRequest;
use super::voice::VoiceProfile;
use super::SpeechEngine;
use crate::error::AppError;

/// Development stub. Produces base64 text describing what would have been
/// spoken; the output is not audio and is not meant to be playable.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderEngine;

impl PlaceholderEngine {
    pub fn sentence(text: &str, voice_id: &str) -> String {
        format!("Nigerian TTS Audio: \"{}\" in {} style", text, voice_id)
    }
}

impl SpeechEngine for PlaceholderEngine {
    fn render(&self, request: &SynthesisRequest, _voice: &VoiceProfile) -> Result<String, AppError> {
        Ok(STANDARD.encode(Self::sentence(&request.text, &request.voice)))
    }
}

/// Decode a payload produced by [`PlaceholderEngine`] back into its sentence.
pub fn decode_payload(payload: &str) -> Result<String, AppError> {
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| AppError::Internal(format!("Corrupt placeholder payload: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(format!("Placeholder payload is not UTF-8: {}", e)))
}
