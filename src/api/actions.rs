//! Action listing and dispatch handlers.

use crate::api::{parse_payload, ActionSummary, ActionsResponse, ApiError, AppState};
use crate::engine::RelayResult;
use crate::logging::generate_request_id;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

/// GET /api/actions - List configured actions in registration order.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<ActionsResponse> {
    let actions: Vec<ActionSummary> = state
        .engine
        .registry()
        .list()
        .iter()
        .map(ActionSummary::from)
        .collect();

    Json(ActionsResponse {
        total_count: actions.len(),
        actions,
    })
}

/// POST /api/actions/:key - Dispatch with the request body forwarded as-is.
pub async fn trigger(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<Json<RelayResult>, ApiError> {
    let payload = parse_payload(&body)?;
    Ok(Json(dispatch(&state, &key, payload, "generic").await))
}

/// POST /api/test-webhook/:key - Dispatch without a payload, for debugging webhooks.
pub async fn test_webhook(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Json<RelayResult> {
    Json(dispatch(&state, &key, None, "test").await)
}

/// Handler behind a configured alias route such as `POST /api/lock`.
///
/// The inbound body is shaped by the action's `payload_fields` and
/// `payload_defaults` before it is forwarded. Actions without
/// `payload_fields` never read the body, so it is not parsed at all.
pub async fn trigger_alias(
    State(state): State<Arc<AppState>>,
    key: String,
    body: Bytes,
) -> Result<Json<RelayResult>, ApiError> {
    let payload = match state.engine.registry().lookup(&key) {
        Ok(action) if action.payload_fields.is_empty() => action.shape_payload(None),
        Ok(action) => action.shape_payload(parse_payload(&body)?.as_ref()),
        Err(_) => None,
    };
    Ok(Json(dispatch(&state, &key, payload, "alias").await))
}

async fn dispatch(
    state: &AppState,
    key: &str,
    payload: Option<serde_json::Map<String, serde_json::Value>>,
    via: &'static str,
) -> RelayResult {
    let request_id = generate_request_id();
    let span = info_span!("relay_request", request_id = %request_id, action = %key, via);

    async {
        info!("Action requested");
        state.engine.dispatch(key, payload).await
    }
    .instrument(span)
    .await
}
