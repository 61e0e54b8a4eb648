pub mod contact;
pub mod handlers;
pub mod routes;

use serde::{Deserialize, Deserializer, Serialize};

use crate::tts::VoiceProfile;

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    // Missing or null text is reported by the validator as empty input.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default, deserialize_with = "lenient_speed")]
    pub speed: Option<f32>,
}

/// Speed is passed through unvalidated: any non-numeric value means "use the default".
fn lenient_speed<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().map(|speed| speed as f32))
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceProfile>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
