//! Service banner

use axum::Json;
use chrono::Utc;
use msgboard_types::timestamp;
use serde::Serialize;

/// Display name reported by the banner endpoint.
pub const APP_NAME: &str = "Msgboard API";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    app: String,
    status: String,
    timestamp: String,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        app: APP_NAME.to_string(),
        status: "running".to_string(),
        timestamp: timestamp::encode(&Utc::now()),
    })
}
