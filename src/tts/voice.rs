use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub available: bool,
}

const VOICES: &[VoiceProfile] = &[
    VoiceProfile {
        id: "lagos-female",
        name: "Lagos Female",
        description: "Warm, upbeat Lagos accent, suited to adverts and announcements",
        available: true,
    },
    VoiceProfile {
        id: "lagos-male",
        name: "Lagos Male",
        description: "Confident Lagos accent for narration and radio spots",
        available: true,
    },
    VoiceProfile {
        id: "abuja-female",
        name: "Abuja Female",
        description: "Clear, formal delivery for corporate and e-learning content",
        available: true,
    },
    VoiceProfile {
        id: "abuja-male",
        name: "Abuja Male",
        description: "Measured, authoritative tone for news and documentaries",
        available: true,
    },
    VoiceProfile {
        id: "yoruba-english",
        name: "Yoruba English",
        description: "English with a South-Western Yoruba lilt",
        available: false,
    },
    VoiceProfile {
        id: "hausa-english",
        name: "Hausa English",
        description: "English with a Northern Hausa cadence",
        available: false,
    },
];

/// Fixed set of voices, in declaration order, with a designated fallback.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: &'static [VoiceProfile],
    fallback: usize,
}

impl VoiceCatalog {
    /// Build the catalog, falling back to the first declared voice when
    /// `default_voice` is not one of ours.
    pub fn new(default_voice: &str) -> Self {
        let fallback = match VOICES.iter().position(|v| v.id == default_voice) {
            Some(index) => index,
            None => {
                tracing::warn!(
                    "Default voice '{}' not in catalog, using '{}'",
                    default_voice,
                    VOICES[0].id
                );
                0
            }
        };

        Self {
            voices: VOICES,
            fallback,
        }
    }

    pub fn list_voices(&self) -> &[VoiceProfile] {
        self.voices
    }

    pub fn fallback(&self) -> &VoiceProfile {
        &self.voices[self.fallback]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.voices.iter().any(|v| v.id == id)
    }

    /// Look up a voice; unknown ids resolve to the fallback profile.
    pub fn get_voice(&self, id: &str) -> &VoiceProfile {
        self.voices
            .iter()
            .find(|v| v.id == id)
            .unwrap_or_else(|| self.fallback())
    }
}
