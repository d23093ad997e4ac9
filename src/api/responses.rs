//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSnapshot;

/// Response for `GET /api/timer/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub current_time: u64,
    pub set_time: u64,
    pub is_running: bool,
    pub display_time: String,
}

impl From<TimerSnapshot> for StatusResponse {
    fn from(snapshot: TimerSnapshot) -> Self {
        Self {
            current_time: snapshot.current_time,
            set_time: snapshot.set_time,
            is_running: snapshot.is_running,
            display_time: snapshot.display_time(),
        }
    }
}

/// Response for the control endpoints that report a duration (start, reset)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeResponse {
    pub status: String,
    pub time: u64,
}

impl TimeResponse {
    pub fn started(time: u64) -> Self {
        Self {
            status: "started".to_string(),
            time,
        }
    }

    pub fn reset(time: u64) -> Self {
        Self {
            status: "reset".to_string(),
            time,
        }
    }
}

/// Response for `POST /api/timer/stop`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopResponse {
    pub status: String,
}

impl StopResponse {
    pub fn stopped() -> Self {
        Self {
            status: "stopped".to_string(),
        }
    }
}

/// Response for `POST /api/timer/pause`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseResponse {
    pub status: String,
    pub is_running: bool,
}

impl PauseResponse {
    /// Describe the outcome of a pause toggle
    pub fn new(is_running: bool) -> Self {
        Self {
            status: if is_running { "resumed" } else { "paused" }.to_string(),
            is_running,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
    pub host: String,
    pub port: u16,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String, host: String, port: u16) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
            host,
            port,
        }
    }
}
