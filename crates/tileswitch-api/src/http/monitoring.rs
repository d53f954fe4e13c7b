//! Health and connectivity handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::timestamp;

/// Liveness of the bridge itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Connected status subscribers.
    pub subscribers: usize,
    pub uptime_seconds: u64,
}

/// Reachability of the conferencing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionStatusResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: timestamp(),
        subscribers: state.connections.connection_count(),
        uptime_seconds: state.uptime().as_secs(),
    })
}

/// GET /api/discord/status
pub async fn discord_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConnectionStatusResponse>, ApiError> {
    state
        .engine
        .check_connected()
        .await
        .map_err(|e| ApiError::Disconnected(e.to_string()))?;

    Ok(Json(ConnectionStatusResponse {
        status: "connected".to_string(),
        message: "Discord is connected and the call page is reachable".to_string(),
        timestamp: timestamp(),
    }))
}
