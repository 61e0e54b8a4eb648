#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Text cannot be empty")]
    EmptyInput,

    #[error(
        "Text too long (max {limit} characters). For longer content, contact us at {contact}"
    )]
    TooLong { limit: usize, contact: String },
}

/// A request that passed validation. `text` is trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub speed: f32,
}

impl SynthesisRequest {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone)]
pub struct RequestValidator {
    max_chars: usize,
    contact: String,
    default_voice: String,
}

impl RequestValidator {
    pub fn new(max_chars: usize, contact: String, default_voice: String) -> Self {
        Self {
            max_chars,
            contact,
            default_voice,
        }
    }

    /// Check length limits. Voice and speed pass through; a missing voice
    /// becomes the default and an unknown one is resolved later.
    pub fn validate(
        &self,
        text: &str,
        voice: Option<&str>,
        speed: Option<f32>,
    ) -> Result<SynthesisRequest, ValidationError> {
        let text = text.trim();
        let len = text.chars().count();

        if len == 0 {
            return Err(ValidationError::EmptyInput);
        }

        if len > self.max_chars {
            return Err(ValidationError::TooLong {
                limit: self.max_chars,
                contact: self.contact.clone(),
            });
        }

        let voice = voice
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(self.default_voice.as_str());

        Ok(SynthesisRequest {
            text: text.to_string(),
            voice: voice.to_string(),
            speed: speed.unwrap_or(1.0),
        })
    }
}
