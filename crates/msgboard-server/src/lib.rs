//! Msgboard Server
//!
//! Message-logging HTTP service: axum surface over a PostgreSQL database
//! of record and a Redis summary cache (submission counter plus rolling
//! recent-message list).

pub mod config;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use services::MessageService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MessageService>,
}

/// Build the HTTP router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/messages",
            get(handlers::messages::list).post(handlers::messages::create),
        )
        .route("/stats", get(handlers::stats))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
