//! Configuration module for the relay
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`RELAY_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use relay::config::RelayConfig;
//!
//! let config = RelayConfig::default();
//! assert_eq!(config.server.port, 5000);
//!
//! let toml = r#"
//! [server]
//! port = 9000
//!
//! [[actions]]
//! key = "lock_screen"
//! url = "https://trigger.example.com/lock"
//! description = "Lock the phone screen immediately"
//! "#;
//! let config: RelayConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! assert_eq!(config.actions.len(), 1);
//! ```

pub mod action;
pub mod error;
pub mod logging;
pub mod relay;
pub mod server;

pub use action::ActionConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use relay::RelaySettings;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Unified configuration for the relay server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Outbound webhook settings
    pub relay: RelaySettings,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Webhook actions, in registration order
    pub actions: Vec<ActionConfig>,
}

impl RelayConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports RELAY_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("RELAY_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("RELAY_HOST") {
            self.server.host = host;
        }

        if let Ok(level) = std::env::var("RELAY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("RELAY_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(timeout) = std::env::var("RELAY_TIMEOUT_SECONDS") {
            if let Ok(t) = timeout.parse() {
                self.relay.timeout_seconds = t;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.relay.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "relay.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        validate_actions(&self.actions)
    }
}

/// Validate an action table: required fields, webhook URLs, unique keys and routes.
pub fn validate_actions(actions: &[ActionConfig]) -> Result<(), ConfigError> {
    let mut keys = HashSet::new();
    let mut routes = HashSet::new();

    for (i, action) in actions.iter().enumerate() {
        if action.key.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: format!("actions[{}].key", i),
                message: "key cannot be empty".to_string(),
            });
        }
        if action.description.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: format!("actions[{}].description", i),
                message: "description cannot be empty".to_string(),
            });
        }

        match reqwest::Url::parse(&action.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Validation {
                    field: format!("actions[{}].url", i),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Validation {
                    field: format!("actions[{}].url", i),
                    message: e.to_string(),
                });
            }
        }

        if !keys.insert(action.key.as_str()) {
            return Err(ConfigError::DuplicateAction(action.key.clone()));
        }

        if let Some(route) = &action.route {
            if !route.starts_with('/') || route.contains(['{', '}', ':', '*']) {
                return Err(ConfigError::Validation {
                    field: format!("actions[{}].route", i),
                    message: "route must be a literal path starting with '/'".to_string(),
                });
            }
            if action::route_is_reserved(route) || !routes.insert(route.as_str()) {
                return Err(ConfigError::RouteConflict {
                    route: route.clone(),
                });
            }
        }
    }

    Ok(())
}
