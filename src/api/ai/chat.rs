use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, ChatRequest, Json};
use crate::domain::ChatReply;

use super::check_length;

/// Answers a visitor question from the canned knowledge base
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatReply>>, ApiError> {
    check_length(&state, "message", &request.message)?;

    let reply = state.analysis.chat(&request.message).await;
    debug!(intent = %reply.intent, topic = ?reply.topic, "Chat reply");

    Ok(Json(ApiResponse::ok("AI回复成功", reply)))
}
