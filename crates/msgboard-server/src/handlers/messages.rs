//! Message submission and listing

use crate::services::DEFAULT_LIST_LIMIT;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use msgboard_core::BoardError;
use msgboard_types::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    content: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(req_body): Json<CreateMessageRequest>,
) -> Result<Json<Message>, StatusCode> {
    match state.service.submit(&req_body.content).await {
        Ok((message, _mirror)) => Ok(Json(message)),
        Err(BoardError::Validation(_)) => Err(StatusCode::UNPROCESSABLE_ENTITY),
        Err(e) => {
            tracing::error!("Failed to store message: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    messages: Vec<Message>,
    total: usize,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<MessageListResponse>, StatusCode> {
    match state.service.list(DEFAULT_LIST_LIMIT).await {
        Ok(messages) => {
            let total = messages.len();
            Ok(Json(MessageListResponse { messages, total }))
        }
        Err(e) => {
            tracing::error!("Failed to list messages: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
