//! # Relay Engine
//!
//! Forwards one action to its webhook and reports what happened.
//!
//! ## Dispatch flow
//!
//! 1. Resolve the action key in the [`ActionRegistry`]
//! 2. POST the payload (or `{}`) to the webhook with a hard timeout
//! 3. Classify the outcome: 2xx, non-2xx, timeout, unreachable, unexpected
//! 4. Record the outcome in [`Statistics`] and return a [`RelayResult`]
//!
//! A single attempt is made per dispatch. Unknown action keys are rejected
//! before any network call and are not counted in the statistics.
//!
//! ## Example
//!
//! ```no_run
//! use relay::config::ActionConfig;
//! use relay::registry::ActionRegistry;
//! use relay::engine::RelayEngine;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(ActionRegistry::new(vec![ActionConfig::new(
//!     "lock_screen",
//!     "https://trigger.example.com/lock",
//!     "Lock the phone screen immediately",
//! )])?);
//! let engine = RelayEngine::new(registry, Duration::from_secs(10))?;
//!
//! let result = engine.dispatch("lock_screen", None).await;
//! println!("{}", result.message);
//! # Ok(())
//! # }
//! ```

mod error;
mod result;
mod stats;

pub use error::RelayError;
pub use result::RelayResult;
pub use stats::{ActionStatus, Statistics, StatsSnapshot};

use crate::registry::ActionRegistry;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Dispatches actions to their webhooks and owns the relay statistics.
#[derive(Debug)]
pub struct RelayEngine {
    registry: Arc<ActionRegistry>,
    stats: Statistics,
    http_client: reqwest::Client,
    timeout: Duration,
}

impl RelayEngine {
    /// Create an engine whose webhook calls are bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be initialised (e.g. no TLS backend).
    pub fn new(registry: Arc<ActionRegistry>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            registry,
            stats: Statistics::new(),
            http_client,
            timeout,
        })
    }

    pub fn registry(&self) -> &Arc<ActionRegistry> {
        &self.registry
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Forward `key` to its webhook with `payload` as the JSON body.
    ///
    /// Never fails: every error is folded into a `RelayResult` with
    /// `success = false`.
    pub async fn dispatch(&self, key: &str, payload: Option<Map<String, Value>>) -> RelayResult {
        let action = match self.registry.lookup(key) {
            Ok(action) => action,
            Err(_) => {
                warn!(action = %key, "Unknown action requested");
                let err = RelayError::UnknownAction(key.to_string());
                record_metrics(key, err.outcome(), None);
                return RelayResult::failed(key, &err);
            }
        };

        info!(action = %key, url = %action.url, "Triggering webhook");

        let body = Value::Object(payload.unwrap_or_default());
        let start = Instant::now();

        let response = self
            .http_client
            .post(&action.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await;

        let elapsed = start.elapsed();
        let elapsed_ms = elapsed.as_millis() as u64;

        match response {
            Ok(response) if response.status().is_success() => {
                let status = response.status().as_u16();
                info!(action = %key, status, elapsed_ms, "Webhook accepted command");
                self.stats.record(key, ActionStatus::Success);
                record_metrics(key, "success", Some(elapsed));
                RelayResult::succeeded(key, &action.description, status)
            }
            Ok(response) => {
                let err = RelayError::UpstreamHttp {
                    status: response.status().as_u16(),
                };
                warn!(action = %key, status = response.status().as_u16(), elapsed_ms, "Webhook rejected command");
                self.fail(key, err, elapsed)
            }
            Err(e) => {
                let err = RelayError::from_transport(&e);
                error!(action = %key, outcome = err.outcome(), error = %e, elapsed_ms, "Webhook request failed");
                self.fail(key, err, elapsed)
            }
        }
    }

    fn fail(&self, key: &str, err: RelayError, elapsed: Duration) -> RelayResult {
        self.stats.record(key, ActionStatus::Error);
        record_metrics(key, err.outcome(), Some(elapsed));
        RelayResult::failed(key, &err)
    }
}

fn record_metrics(key: &str, outcome: &'static str, elapsed: Option<Duration>) {
    let action = crate::metrics::sanitize_label(key);

    metrics::counter!("relay_dispatch_total",
        "action" => action.clone(),
        "outcome" => outcome
    )
    .increment(1);

    if let Some(elapsed) = elapsed {
        metrics::histogram!("relay_dispatch_duration_seconds", "action" => action)
            .record(elapsed.as_secs_f64());
    }
}
