//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{body::Bytes, extract::State, response::Json};
use tracing::{debug, warn};

use crate::state::AppState;
use super::{
    error::ApiError,
    requests::StartRequest,
    responses::{HealthResponse, PauseResponse, StatusResponse, StopResponse, TimeResponse},
};

/// Handle GET /api/timer/status - Return the current countdown
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let snapshot = state.status()?;
    Ok(Json(snapshot.into()))
}

/// Handle POST /api/timer/start - Set and start a countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TimeResponse>, ApiError> {
    let request = StartRequest::from_body(&body)
        .inspect_err(|e| warn!("Rejected start request: {}", e))?;
    debug!("Start requested: {:?}", request);

    let total = state.start(request.minutes(), request.seconds())?;
    Ok(Json(TimeResponse::started(total)))
}

/// Handle POST /api/timer/stop - Stop and clear the countdown
pub async fn stop_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StopResponse>, ApiError> {
    state.stop()?;
    Ok(Json(StopResponse::stopped()))
}

/// Handle POST /api/timer/pause - Pause or resume the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PauseResponse>, ApiError> {
    let is_running = state.pause_resume()?;
    Ok(Json(PauseResponse::new(is_running)))
}

/// Handle POST /api/timer/reset - Rewind to the last started duration
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimeResponse>, ApiError> {
    let set_time = state.reset()?;
    Ok(Json(TimeResponse::reset(set_time)))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(
        state.get_uptime(),
        state.host.clone(),
        state.port,
    ))
}
