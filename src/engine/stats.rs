//! Shared relay statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// Status of the most recent recorded dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Point-in-time copy of the counters.
///
/// `total_requests == successful_requests + failed_requests` holds for every
/// snapshot, because snapshots are only taken under the same lock that
/// guards updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub last_action_status: Option<ActionStatus>,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub process_start_time: DateTime<Utc>,
}

/// Relay counters guarded by a single mutex.
///
/// The lock is held only while copying or mutating the counters, never
/// across a webhook call.
#[derive(Debug)]
pub struct Statistics {
    inner: Mutex<StatsSnapshot>,
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StatsSnapshot {
                last_action: None,
                last_action_time: None,
                last_action_status: None,
                total_requests: 0,
                successful_requests: 0,
                failed_requests: 0,
                process_start_time: Utc::now(),
            }),
        }
    }

    /// Record one completed dispatch.
    pub fn record(&self, action: &str, status: ActionStatus) {
        let mut stats = self.lock();
        stats.last_action = Some(action.to_string());
        stats.last_action_time = Some(Utc::now());
        stats.last_action_status = Some(status);
        stats.total_requests += 1;
        match status {
            ActionStatus::Success => stats.successful_requests += 1,
            ActionStatus::Error => stats.failed_requests += 1,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, StatsSnapshot> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Statistics lock poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
