//! Error responses for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::error::TimerError;

/// Errors returned from request handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be understood
    #[error("invalid request: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Timer(#[from] TimerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput(_) | Self::Timer(TimerError::DurationOverflow { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::Timer(TimerError::LockPoisoned(_)) => {
                error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
