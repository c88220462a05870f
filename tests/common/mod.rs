//! Shared test utilities for relay integration tests.
//!
//! Builds registries, engines and routers pointed at wiremock servers.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use relay::api::{create_router, AppState};
use relay::config::{ActionConfig, RelayConfig};
use relay::engine::RelayEngine;
use relay::registry::ActionRegistry;
use std::sync::Arc;
use std::time::Duration;

/// Timeout used by tests that do not exercise the timeout path.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The five phone actions, pointed at `base_url`.
pub fn phone_actions(base_url: &str) -> Vec<ActionConfig> {
    let mut block_touch = ActionConfig::new(
        "block_touch",
        format!("{}/block", base_url),
        "Block touch/UI interaction for 10 seconds",
    )
    .with_route("/api/block-touch");
    block_touch.payload_fields = vec!["duration".to_string()];
    block_touch
        .payload_defaults
        .insert("duration".to_string(), serde_json::json!(10));

    let open_site = |n: u8| {
        let mut action = ActionConfig::new(
            format!("open_site{}", n),
            format!("{}/site{}", base_url, n),
            format!("Open Site {}", n),
        )
        .with_route(format!("/api/open-site{}", n));
        action.payload_fields = vec!["url".to_string()];
        action
    };

    vec![
        ActionConfig::new(
            "lock_screen",
            format!("{}/lock", base_url),
            "Lock the phone screen immediately",
        )
        .with_route("/api/lock"),
        block_touch,
        open_site(1),
        open_site(2),
        open_site(3),
    ]
}

/// Engine over `actions` with the given webhook timeout.
pub fn make_engine(actions: Vec<ActionConfig>, timeout: Duration) -> Arc<RelayEngine> {
    let registry = Arc::new(ActionRegistry::new(actions).unwrap());
    Arc::new(RelayEngine::new(registry, timeout).unwrap())
}

/// Engine with the phone actions pointed at a mock server.
pub fn make_phone_engine(mock_server: &wiremock::MockServer) -> Arc<RelayEngine> {
    make_engine(phone_actions(&mock_server.uri()), TEST_TIMEOUT)
}

/// Router around an engine, with default server settings.
pub fn make_app(engine: Arc<RelayEngine>) -> axum::Router {
    let config = RelayConfig {
        actions: engine.registry().list().to_vec(),
        ..RelayConfig::default()
    };
    let state = Arc::new(AppState::new(engine, Arc::new(config)));
    create_router(state)
}

/// A URL on localhost where nothing is listening.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/lock", port)
}

pub fn post(uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
