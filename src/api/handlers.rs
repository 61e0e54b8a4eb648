use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, SynthesizeRequest, VoicesResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::tts::{Order, SynthesisResponse, UsageSnapshot};

pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<SynthesisResponse>, AppError> {
    let response = state.tts.synthesize(
        request.text.as_deref().unwrap_or_default(),
        request.voice.as_deref(),
        request.speed,
    )?;
    Ok(Json(response))
}

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: state.tts.list_voices().to_vec(),
    })
}

pub async fn analytics(State(state): State<Arc<AppState>>) -> Json<UsageSnapshot> {
    Json(state.tts.analytics())
}

pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<u64>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.tts.order(order_id)?))
}

pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<u64>,
) -> Result<Response, AppError> {
    let sentence = state.tts.download(order_id)?;
    let disposition = format!("attachment; filename=\"order-{}.txt\"", order_id);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        sentence,
    )
        .into_response())
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
