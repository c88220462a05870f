//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::RelayConfig;
use crate::engine::RelayEngine;
use crate::registry::ActionRegistry;
use std::path::Path;
use std::sync::Arc;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<RelayConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_or_default(&args.config)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if let Some(timeout) = args.timeout {
        config.relay.timeout_seconds = timeout;
    }

    Ok(config)
}

/// Load the config file if it exists, otherwise defaults; env overrides applied either way.
pub fn load_config_or_default(path: &Path) -> Result<RelayConfig, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        RelayConfig::load(Some(path))?
    } else {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        RelayConfig::default()
    };

    Ok(config.with_env_overrides())
}

/// Validate a config and build the registry and engine it describes.
pub fn build_engine(config: &RelayConfig) -> Result<Arc<RelayEngine>, Box<dyn std::error::Error>> {
    config.validate()?;
    let registry = Arc::new(ActionRegistry::from_config(config)?);
    let engine = RelayEngine::new(registry, config.relay.timeout())?;
    Ok(Arc::new(engine))
}

/// Log the configured actions at startup
fn log_actions(registry: &ActionRegistry) {
    if registry.is_empty() {
        tracing::warn!("No actions configured; every dispatch will report an unknown action");
        return;
    }

    for action in registry.list() {
        tracing::info!(
            action = %action.key,
            route = action.route.as_deref().unwrap_or("-"),
            description = %action.description,
            "Registered action"
        );
    }
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load, merge and validate configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    crate::logging::init_tracing(&config.logging)?;

    tracing::info!(
        timeout_seconds = config.relay.timeout_seconds,
        "Starting webhook relay"
    );
    tracing::debug!(?config, "Loaded configuration");

    // 3. Build registry and engine
    let engine = build_engine(&config)?;
    log_actions(engine.registry());

    // 4. Build API router
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(engine, Arc::new(config)));
    let app = create_router(state);

    // 5. Bind and serve
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Relay API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Relay server stopped");
    Ok(())
}
