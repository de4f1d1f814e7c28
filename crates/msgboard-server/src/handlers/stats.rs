//! Aggregate statistics combining cache and store

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use msgboard_types::Message;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    redis_count: i64,
    postgres_count: i64,
    recent_messages: Vec<Message>,
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, StatusCode> {
    match state.service.stats().await {
        Ok(stats) => Ok(Json(StatsResponse {
            redis_count: stats.cache_count,
            postgres_count: stats.store_count,
            recent_messages: stats.recent,
        })),
        Err(e) => {
            tracing::error!("Failed to read stats: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
