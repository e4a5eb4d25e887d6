//! Chat completion route.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use protocol::{ChatReply, ChatRequest};

use crate::error::ApiError;
use crate::services::chat;
use crate::state::AppState;

/// `POST /api/chat`: forward the conversation to the hosted model.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let llm = state.llm.as_ref().ok_or(ApiError::LlmNotConfigured)?;

    let reply = chat::handle_chat(llm.as_ref(), &state.sampling, &request).await?;
    Ok(Json(reply))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
