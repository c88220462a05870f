//! Outbound webhook settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default hard timeout for a single webhook call.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Settings for the outbound side of the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaySettings {
    /// Hard timeout applied to every webhook POST
    pub timeout_seconds: u64,
}

impl RelaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
