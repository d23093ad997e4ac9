//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers, request and response structures.

pub mod error;
pub mod handlers;
pub mod requests;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

pub use error::ApiError;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/timer/status", get(status_handler))
        .route("/api/timer/start", post(start_handler))
        .route("/api/timer/stop", post(stop_handler))
        .route("/api/timer/pause", post(pause_handler))
        .route("/api/timer/reset", post(reset_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
