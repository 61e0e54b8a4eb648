use axum::Json;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const MAX_MESSAGE_CHARS: usize = 2000;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

fn check(request: &ContactRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() || request.message.trim().is_empty() {
        return Err(AppError::BadRequest("Name and message are required".into()));
    }

    if !EMAIL_REGEX.is_match(request.email.trim()) {
        return Err(AppError::BadRequest("A valid email address is required".into()));
    }

    if request.message.trim().chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Message too long (max {} chars)",
            MAX_MESSAGE_CHARS
        )));
    }

    Ok(())
}

/// Contact submissions are only logged; nothing is delivered.
pub async fn submit(Json(request): Json<ContactRequest>) -> Result<Json<ContactResponse>, AppError> {
    check(&request)?;

    tracing::info!(
        name = request.name.trim(),
        email = request.email.trim(),
        "Contact form: {}",
        request.message.trim()
    );

    Ok(Json(ContactResponse {
        success: true,
        message: "Thanks for reaching out, we'll get back to you shortly.".to_string(),
    }))
}
