pub mod orders;
pub mod placeholder;
pub mod usage;
pub mod validate;
pub mod voice;

use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;

pub use orders::{Order, OrderBook, OrderStatus};
pub use placeholder::PlaceholderEngine;
pub use usage::{UsageAggregator, UsageSnapshot};
pub use validate::{RequestValidator, SynthesisRequest, ValidationError};
pub use voice::{VoiceCatalog, VoiceProfile};

pub const ORDER_MESSAGE: &str =
    "Order received! Your Nigerian-accented audio is queued for generation.";
pub const ESTIMATED_DELIVERY: &str = "5-10 minutes";

/// Turns a validated request into an audio payload for the given voice.
pub trait SpeechEngine: Send + Sync {
    fn render(&self, request: &SynthesisRequest, voice: &VoiceProfile) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResponse {
    pub order_id: u64,
    pub status: OrderStatus,
    pub message: String,
    pub estimated_delivery: String,
    pub audio_url: String,
    pub download_url: String,
    pub voice: String,
    pub voice_name: String,
    pub speed: f32,
    pub characters: usize,
}

pub struct TtsService {
    catalog: VoiceCatalog,
    validator: RequestValidator,
    usage: UsageAggregator,
    orders: OrderBook,
    engine: Box<dyn SpeechEngine>,
}

impl TtsService {
    pub fn new(config: &Config) -> Self {
        Self::with_engine(config, Box::new(PlaceholderEngine))
    }

    pub fn with_engine(config: &Config, engine: Box<dyn SpeechEngine>) -> Self {
        let catalog = VoiceCatalog::new(&config.default_voice);
        let validator = RequestValidator::new(
            config.max_text_chars,
            config.contact_email.clone(),
            catalog.fallback().id.to_string(),
        );

        Self {
            catalog,
            validator,
            usage: UsageAggregator::new(),
            orders: OrderBook::new(config.max_orders),
            engine,
        }
    }

    pub fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        speed: Option<f32>,
    ) -> Result<SynthesisResponse, AppError> {
        // 1. Validate
        let request = self.validator.validate(text, voice, speed)?;

        // 2. Resolve display profile; the requested id is kept as-is
        if !self.catalog.contains(&request.voice) {
            tracing::info!(
                "Unknown voice '{}', displaying as '{}'",
                request.voice,
                self.catalog.fallback().id
            );
        }
        let profile = self.catalog.get_voice(&request.voice);

        // 3. Render
        let payload = self.engine.render(&request, profile)?;

        // 4. Record
        let characters = request.char_count();
        self.usage.record_accepted(characters);
        let order = self
            .orders
            .create(request.voice.clone(), request.speed, characters, payload);

        tracing::info!(
            order_id = order.order_id,
            voice = request.voice.as_str(),
            characters,
            "Accepted synthesis request"
        );

        Ok(SynthesisResponse {
            order_id: order.order_id,
            status: order.status,
            message: format!("{} Voice: {}.", ORDER_MESSAGE, profile.name),
            estimated_delivery: ESTIMATED_DELIVERY.to_string(),
            audio_url: format!("data:text/plain;base64,{}", order.payload),
            download_url: format!("/api/orders/{}/download", order.order_id),
            voice: order.voice,
            voice_name: profile.name.to_string(),
            speed: order.speed,
            characters,
        })
    }

    pub fn list_voices(&self) -> &[VoiceProfile] {
        self.catalog.list_voices()
    }

    pub fn analytics(&self) -> UsageSnapshot {
        self.usage.snapshot()
    }

    pub fn order(&self, order_id: u64) -> Result<Order, AppError> {
        self.orders.get(order_id)
    }

    /// The decoded placeholder sentence for an order.
    pub fn download(&self, order_id: u64) -> Result<String, AppError> {
        let order = self.orders.get(order_id)?;
        placeholder::decode_payload(&order.payload)
    }
}
