use crate::config::ConfigError;

/// Errors that can occur during registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("invalid action table: {0}")]
    Invalid(#[from] ConfigError),
}
