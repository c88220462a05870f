//! Relay status endpoint handler.

use crate::api::{AppState, StatusResponse};
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /api/status - Relay statistics for health-check polling.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let snapshot = state.engine.stats().snapshot();
    Json(StatusResponse::from_snapshot(
        snapshot,
        state.start_time.elapsed().as_secs(),
    ))
}
