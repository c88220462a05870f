//! Relay outcome taxonomy.

use thiserror::Error;

/// Every way a dispatch can fail.
///
/// None of these escape the engine: each one is folded into a
/// [`RelayResult`](super::RelayResult) with `success = false`, and the
/// `Display` text is the message the caller sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The action key is not in the registry.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// The webhook answered with a non-2xx status.
    #[error("Webhook returned HTTP {status}")]
    UpstreamHttp { status: u16 },

    /// No response within the configured timeout.
    #[error("Request timed out. Phone may be unreachable.")]
    UpstreamTimeout,

    /// DNS failure, refused connection and other transport failures.
    #[error("Cannot connect to phone. Check internet connection.")]
    UpstreamUnreachable,

    /// Anything the other variants do not cover.
    #[error("Unexpected error: {0}")]
    UpstreamUnexpected(String),
}

impl RelayError {
    /// Classify a transport-level failure from the HTTP client.
    ///
    /// Timeouts win over connect errors, so a connect timeout reports as a timeout.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::UpstreamTimeout
        } else if err.is_connect() {
            RelayError::UpstreamUnreachable
        } else {
            RelayError::UpstreamUnexpected(err.to_string())
        }
    }

    /// HTTP status reported by the webhook, if it answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RelayError::UpstreamHttp { status } => Some(*status),
            _ => None,
        }
    }

    /// Short label used for metrics and log fields.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::UnknownAction(_) => "unknown_action",
            RelayError::UpstreamHttp { .. } => "http_error",
            RelayError::UpstreamTimeout => "timeout",
            RelayError::UpstreamUnreachable => "unreachable",
            RelayError::UpstreamUnexpected(_) => "unexpected",
        }
    }
}
