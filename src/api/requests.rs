//! API request bodies

use serde::Deserialize;

use super::error::ApiError;

/// Body of `POST /api/timer/start`. Missing or `null` fields count as zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub minutes: Option<u64>,
    #[serde(default)]
    pub seconds: Option<u64>,
}

impl StartRequest {
    /// Parse a raw request body. An empty body is the same as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| ApiError::InvalidInput(e.to_string()))
    }

    pub fn minutes(&self) -> u64 {
        self.minutes.unwrap_or(0)
    }

    pub fn seconds(&self) -> u64 {
        self.seconds.unwrap_or(0)
    }
}
