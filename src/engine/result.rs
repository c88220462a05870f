//! Per-dispatch result record.

use super::RelayError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one dispatch, serialized as the JSON body returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayResult {
    pub success: bool,
    pub action: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Taken when the result is built, i.e. after the webhook call returned
    pub timestamp: DateTime<Utc>,
}

impl RelayResult {
    /// Result for a webhook that answered with a 2xx status.
    pub fn succeeded(action: &str, description: &str, status_code: u16) -> Self {
        Self {
            success: true,
            action: action.to_string(),
            message: format!("{} - Command sent successfully", description),
            status_code: Some(status_code),
            timestamp: Utc::now(),
        }
    }

    /// Result for any failed dispatch.
    pub fn failed(action: &str, error: &RelayError) -> Self {
        Self {
            success: false,
            action: action.to_string(),
            message: error.to_string(),
            status_code: error.status_code(),
            timestamp: Utc::now(),
        }
    }
}
