//! Action Registry module.
//!
//! Immutable lookup table from action key to webhook configuration. Built once
//! at startup and shared behind an `Arc`; no synchronization is needed.

mod error;

pub use error::*;

use crate::config::{validate_actions, ActionConfig, RelayConfig};
use std::collections::HashMap;

/// The Action Registry stores all configured webhook actions.
///
/// # Examples
///
/// ```
/// use relay::config::ActionConfig;
/// use relay::registry::ActionRegistry;
///
/// let registry = ActionRegistry::new(vec![ActionConfig::new(
///     "lock_screen",
///     "https://trigger.example.com/lock",
///     "Lock the phone screen immediately",
/// )])
/// .unwrap();
///
/// assert_eq!(registry.len(), 1);
/// assert!(registry.lookup("lock_screen").is_ok());
/// assert!(registry.lookup("nonexistent_key").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<ActionConfig>,
    by_key: HashMap<String, usize>,
    by_route: HashMap<String, usize>,
}

impl ActionRegistry {
    /// Build a registry from an action table, in registration order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Invalid` if the table fails validation
    /// (empty fields, bad URLs, duplicate keys or routes).
    pub fn new(actions: Vec<ActionConfig>) -> Result<Self, RegistryError> {
        validate_actions(&actions)?;

        let by_key = actions
            .iter()
            .enumerate()
            .map(|(i, action)| (action.key.clone(), i))
            .collect();
        let by_route = actions
            .iter()
            .enumerate()
            .filter_map(|(i, action)| action.route.clone().map(|route| (route, i)))
            .collect();

        Ok(Self {
            actions,
            by_key,
            by_route,
        })
    }

    /// Build a registry from the `[[actions]]` section of a loaded config.
    pub fn from_config(config: &RelayConfig) -> Result<Self, RegistryError> {
        Self::new(config.actions.clone())
    }

    /// Resolve an action key.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownAction` if no action has this key.
    pub fn lookup(&self, key: &str) -> Result<&ActionConfig, RegistryError> {
        self.by_key
            .get(key)
            .map(|&i| &self.actions[i])
            .ok_or_else(|| RegistryError::UnknownAction(key.to_string()))
    }

    /// Resolve an alias route such as `/api/lock`.
    pub fn by_route(&self, route: &str) -> Option<&ActionConfig> {
        self.by_route.get(route).map(|&i| &self.actions[i])
    }

    /// All actions in registration order.
    pub fn list(&self) -> &[ActionConfig] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
