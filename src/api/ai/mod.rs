//! Analysis endpoints under `/api/ai`

pub mod chat;
pub mod content;
pub mod resume;

use axum::{Router, routing::post};

use super::state::AppState;
use super::types::ApiError;

pub fn create_ai_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/classify", post(content::classify))
        .route("/summarize", post(content::summarize))
        .route("/tags", post(content::tags))
        .route("/analyze", post(content::analyze_article))
        .route("/resume", post(resume::analyze_resume))
}

/// Rejects oversized text, naming the request field
fn check_length(state: &AppState, field: &str, text: &str) -> Result<(), ApiError> {
    state
        .analysis
        .validate_content(field, text)
        .map_err(|e| ApiError::from(e).with_param(field))
}
