//! Request and response types for the relay API.

use crate::config::ActionConfig;
use crate::engine::{ActionStatus, StatsSnapshot};
use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response for `GET /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub online: bool,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub last_action_status: Option<ActionStatus>,
    pub statistics: RequestCounts,
    pub process_start_time: DateTime<Utc>,
    pub current_time: DateTime<Utc>,
    pub uptime_seconds: u64,
}

/// Dispatch counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCounts {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
}

impl StatusResponse {
    pub fn from_snapshot(stats: StatsSnapshot, uptime_seconds: u64) -> Self {
        Self {
            online: true,
            last_action: stats.last_action,
            last_action_time: stats.last_action_time,
            last_action_status: stats.last_action_status,
            statistics: RequestCounts {
                total_requests: stats.total_requests,
                successful_requests: stats.successful_requests,
                failed_requests: stats.failed_requests,
            },
            process_start_time: stats.process_start_time,
            current_time: Utc::now(),
            uptime_seconds,
        }
    }
}

/// Response for `GET /api/actions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionsResponse {
    pub actions: Vec<ActionSummary>,
    pub total_count: usize,
}

/// Public view of an action. Webhook URLs are not exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSummary {
    pub key: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl From<&ActionConfig> for ActionSummary {
    fn from(action: &ActionConfig) -> Self {
        Self {
            key: action.key.clone(),
            description: action.description.clone(),
            route: action.route.clone(),
        }
    }
}

/// Parse an inbound request body into an optional payload.
///
/// An empty body or `null` means no payload. Anything else must be a JSON object.
pub fn parse_payload(body: &Bytes) -> Result<Option<Map<String, Value>>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(Value::Null) => Ok(None),
        Ok(_) => Err(ApiError::bad_request("Request body must be a JSON object")),
        Err(e) => Err(ApiError::bad_request(&format!("Malformed JSON body: {}", e))),
    }
}

/// API-level error response, distinct from relay results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub message: String,
    pub code: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    fn new(message: &str, code: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            code: code.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Create a bad request error (400).
    pub fn bad_request(message: &str) -> Self {
        Self::new(message, "invalid_request")
    }

    /// Create a not found error (404).
    pub fn not_found() -> Self {
        Self::new("Endpoint not found", "not_found")
    }

    /// Create an internal server error (500).
    pub fn internal() -> Self {
        Self::new("Internal server error", "internal_error")
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self.code.as_str() {
            "invalid_request" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
