//! # Metrics Module
//!
//! Prometheus export of relay activity at `GET /metrics`.
//!
//! **Counters:**
//! - `relay_dispatch_total{action, outcome}` - Dispatches by outcome
//!   (`success`, `http_error`, `timeout`, `unreachable`, `unexpected`, `unknown_action`)
//!
//! **Histograms:**
//! - `relay_dispatch_duration_seconds{action}` - Webhook round-trip time

pub mod handler;

// Re-exported for callers that build their own recorder
pub use metrics_exporter_prometheus::PrometheusBuilder;

use metrics_exporter_prometheus::PrometheusHandle;

/// Install the global Prometheus recorder.
///
/// Buckets cover fast webhook acknowledgements up to the default 10s timeout.
pub fn setup_metrics() -> Result<PrometheusHandle, Box<dyn std::error::Error>> {
    use metrics_exporter_prometheus::Matcher;

    let duration_buckets = &[0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("relay_dispatch_duration_seconds".to_string()),
            duration_buckets,
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Install the global recorder, or fall back to a detached handle when one
/// is already installed (several app states in one test process).
pub fn setup_or_detached() -> PrometheusHandle {
    setup_metrics().unwrap_or_else(|e| {
        tracing::debug!("Metrics already initialized, creating new handle: {}", e);
        PrometheusBuilder::new().build_recorder().handle()
    })
}

/// Make an arbitrary string safe to use as a Prometheus label value.
///
/// Non-alphanumeric characters become underscores and a leading digit gets
/// an underscore prefix, so action keys stay readable across exporters.
pub fn sanitize_label(label: &str) -> String {
    let mut sanitized = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();

    if sanitized.is_empty() || sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        sanitized.insert(0, '_');
    }

    sanitized
}
