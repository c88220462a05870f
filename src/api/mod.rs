//! # Relay HTTP API
//!
//! Thin axum layer in front of the [`RelayEngine`].
//!
//! ## Endpoints
//!
//! - `GET /api/status` - Relay statistics, `online: true` and server time
//! - `GET /api/actions` - Configured actions, in registration order
//! - `POST /api/actions/:key` - Dispatch `key`, forwarding the JSON body
//! - `POST /api/test-webhook/:key` - Dispatch `key` without a payload
//! - `POST <route>` - Alias routes declared per action (e.g. `/api/lock`)
//! - `GET /health` - Liveness
//! - `GET /metrics` - Prometheus metrics
//!
//! Relay outcomes are always returned with HTTP 200 and a [`RelayResult`]
//! body; `success` tells the caller whether the webhook accepted the command.
//! Unknown routes, malformed bodies and panics produce an [`ApiError`] body
//! with a 404, 400 or 500 status instead.
//!
//! ## Example
//!
//! ```no_run
//! use relay::api::{create_router, AppState};
//! use relay::config::RelayConfig;
//! use relay::registry::ActionRegistry;
//! use relay::engine::RelayEngine;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RelayConfig::default();
//! let registry = Arc::new(ActionRegistry::from_config(&config)?);
//! let engine = Arc::new(RelayEngine::new(registry, config.relay.timeout())?);
//! let state = Arc::new(AppState::new(engine, Arc::new(config)));
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`RelayResult`]: crate::engine::RelayResult

mod actions;
mod health;
mod status;
pub mod types;

pub use types::*;

use crate::config::RelayConfig;
use crate::engine::RelayEngine;
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub engine: Arc<RelayEngine>,
    pub config: Arc<RelayConfig>,
    /// Prometheus handle for rendering `/metrics`
    pub prometheus: PrometheusHandle,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state around a relay engine.
    pub fn new(engine: Arc<RelayEngine>, config: Arc<RelayConfig>) -> Self {
        Self {
            engine,
            config,
            prometheus: crate::metrics::setup_or_detached(),
            start_time: Instant::now(),
        }
    }
}

/// Create the main API router with all endpoints configured.
///
/// Alias routes are taken from the engine's registry; the registry has
/// already rejected aliases that collide with the fixed routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/status", get(status::handle))
        .route("/api/actions", get(actions::list))
        .route("/api/actions/:key", post(actions::trigger))
        .route("/api/test-webhook/:key", post(actions::test_webhook))
        .route("/health", get(health::handle))
        .route("/metrics", get(crate::metrics::handler::metrics_handler));

    for action in state.engine.registry().list() {
        if let Some(route) = &action.route {
            let key = action.key.clone();
            router = router.route(
                route,
                post(move |state: State<Arc<AppState>>, body: Bytes| {
                    actions::trigger_alias(state, key, body)
                }),
            );
        }
    }

    let max_body_bytes = state.config.server.max_body_bytes;

    with_layers(router, max_body_bytes).with_state(state)
}

/// Fallback and middleware shared by every route.
fn with_layers(router: Router<Arc<AppState>>, max_body_bytes: usize) -> Router<Arc<AppState>> {
    router
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "Handler panicked");
    ApiError::internal().into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ActionRegistry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::time::Duration;
    use tower::Service;

    fn test_state() -> Arc<AppState> {
        let registry = Arc::new(ActionRegistry::default());
        let engine = Arc::new(RelayEngine::new(registry, Duration::from_secs(1)).unwrap());
        Arc::new(AppState::new(engine, Arc::new(RelayConfig::default())))
    }

    async fn exploding_handler() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_handler_panic_returns_internal_error_json() {
        let state = test_state();
        let router = Router::new().route("/explode", get(exploding_handler));
        let mut app = with_layers(router, 1024).with_state(state);

        let request = Request::builder()
            .uri("/explode")
            .body(Body::empty())
            .unwrap();
        let response = app.call(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "internal_error");
        assert_eq!(json["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_not_found_json() {
        let mut app = create_router(test_state());

        let request = Request::builder()
            .uri("/nowhere")
            .body(Body::empty())
            .unwrap();
        let response = app.call(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
