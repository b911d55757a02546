//! Chat HTTP handlers.
//!
//! Endpoints:
//! - GET  /              - Liveness message
//! - POST /chat          - Answer one message and record the turn
//! - GET  /chat/history  - Full conversation log, oldest first

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use banter_types::turn::Turn;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub chat_history: Vec<Turn>,
}

/// GET / - Liveness message.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Banter chatbot is running!" }))
}

/// POST /chat - Generate a reply and append the turn.
///
/// Provider failures still answer 200 with an error reply; only a missing
/// or empty message (or an undecodable body) is a 400.
pub async fn post_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let response = state.chat_service.submit(request.message.as_deref()).await?;
    Ok(Json(ChatResponse { response }))
}

/// GET /chat/history - The conversation log.
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let chat_history = state.chat_service.history().await;
    Json(HistoryResponse { chat_history })
}
