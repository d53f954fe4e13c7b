//! Stream control handlers.
//!
//! Each handler performs at most one engine operation. Malformed path values
//! are rejected with 400 before the engine is touched.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tileswitch_engine::{EngineStatus, KeyChord, ShortcutAction};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Highest Stream Deck button number accepted.
pub const MAX_BUTTON: i64 = 32;

/// Response carrying only the outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchByIdResponse {
    pub success: bool,
    pub stream_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SwitchByIndexResponse {
    pub success: bool,
    pub index: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonResponse {
    pub success: bool,
    pub button_number: i64,
    pub stream_index: i64,
}

/// Response to a forwarded key chord.
#[derive(Debug, Serialize)]
pub struct ShortcutResponse {
    pub handled: bool,
    #[serde(flatten)]
    pub action: Option<ShortcutAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

pub(crate) fn parse_index(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid stream index: {}", raw)))
}

pub(crate) fn parse_button(raw: &str) -> Result<i64, ApiError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if (1..=MAX_BUTTON).contains(&n) => Ok(n),
        _ => Err(ApiError::BadRequest(format!(
            "Button number must be between 1 and {}",
            MAX_BUTTON
        ))),
    }
}

pub(crate) async fn refresh_and_status(state: &AppState) -> Result<EngineStatus, ApiError> {
    let streams = state.engine.refresh_streams().await?;
    debug!("Refreshed {} streams", streams.len());
    Ok(state.engine.get_status().await)
}

/// Status read back only after the page answered, so a closed page is an error.
pub(crate) async fn live_status(state: &AppState) -> Result<EngineStatus, ApiError> {
    state.engine.check_connected().await?;
    Ok(state.engine.get_status().await)
}

/// GET /api/streams
pub async fn get_streams(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EngineStatus>, ApiError> {
    Ok(Json(live_status(&state).await?))
}

/// POST /api/streams/refresh
pub async fn refresh_streams(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EngineStatus>, ApiError> {
    Ok(Json(refresh_and_status(&state).await?))
}

/// POST /api/streams/switch-by-id/{id}
pub async fn switch_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SwitchByIdResponse>, ApiError> {
    let success = state.engine.switch_to_stream_by_id(&id).await?;
    Ok(Json(SwitchByIdResponse {
        success,
        stream_id: id,
    }))
}

/// POST /api/streams/switch-by-index/{index}
pub async fn switch_by_index(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<Json<SwitchByIndexResponse>, ApiError> {
    let index = parse_index(&raw)?;
    let success = state.engine.switch_to_stream_by_index(index).await?;
    Ok(Json(SwitchByIndexResponse { success, index }))
}

/// POST /api/streams/next
pub async fn next_stream(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let success = state.engine.switch_to_next_stream().await?;
    Ok(Json(SuccessResponse { success }))
}

/// POST /api/streams/previous
pub async fn previous_stream(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let success = state.engine.switch_to_previous_stream().await?;
    Ok(Json(SuccessResponse { success }))
}

/// POST /api/streams/swap
pub async fn swap_focused(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let success = state.engine.swap_current_focused().await?;
    Ok(Json(SuccessResponse { success }))
}

/// POST /api/stream-deck/button/{n}
pub async fn stream_deck_button(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<Json<ButtonResponse>, ApiError> {
    let button_number = parse_button(&raw)?;
    let stream_index = button_number - 1;
    let success = state.engine.switch_to_stream_by_index(stream_index).await?;
    info!("Button {} pressed -> stream {}", button_number, stream_index);
    Ok(Json(ButtonResponse {
        success,
        button_number,
        stream_index,
    }))
}

/// POST /api/shortcut
pub async fn shortcut(
    State(state): State<Arc<AppState>>,
    Json(chord): Json<KeyChord>,
) -> Result<Json<ShortcutResponse>, ApiError> {
    let Some(action) = state.shortcuts.resolve(&chord) else {
        debug!("Ignoring key chord {:?}", chord);
        return Ok(Json(ShortcutResponse {
            handled: false,
            action: None,
            success: None,
        }));
    };
    let success = state.engine.run_shortcut(action).await?;
    Ok(Json(ShortcutResponse {
        handled: true,
        action: Some(action),
        success: Some(success),
    }))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
