//! Health probe
//!
//! Backend failure comes back as data, never as an error response.

use crate::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use msgboard_types::timestamp;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    redis: String,
    postgres: String,
    timestamp: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = state.service.health().await;

    let status = if report.is_healthy() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        redis: report.cache.describe(),
        postgres: report.store.describe(),
        timestamp: timestamp::encode(&Utc::now()),
    })
}
