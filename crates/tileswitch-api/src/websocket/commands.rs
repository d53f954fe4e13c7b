//! WebSocket command dispatch.

use serde_json::Value;

use super::message::WsCommand;
use crate::error::ApiError;
use crate::http::handlers::{
    live_status, parse_index, refresh_and_status, SuccessResponse, SwitchByIdResponse,
    SwitchByIndexResponse,
};
use crate::state::AppState;

/// Run one client command and build the reply, using the REST response shapes.
pub async fn dispatch(state: &AppState, cmd: &WsCommand) -> Result<Value, ApiError> {
    let engine = &state.engine;
    let reply = match cmd.command.as_str() {
        "get_streams" => serde_json::to_value(live_status(state).await?),
        "refresh" => serde_json::to_value(refresh_and_status(state).await?),
        "switch_by_id" => {
            let stream_id = cmd
                .param_str("streamId")
                .ok_or_else(|| ApiError::BadRequest("Missing parameter: streamId".to_string()))?;
            let success = engine.switch_to_stream_by_id(&stream_id).await?;
            serde_json::to_value(SwitchByIdResponse { success, stream_id })
        }
        "switch_by_index" => {
            let raw = cmd
                .param_str("index")
                .ok_or_else(|| ApiError::BadRequest("Missing parameter: index".to_string()))?;
            let index = parse_index(&raw)?;
            let success = engine.switch_to_stream_by_index(index).await?;
            serde_json::to_value(SwitchByIndexResponse { success, index })
        }
        "next" => serde_json::to_value(SuccessResponse {
            success: engine.switch_to_next_stream().await?,
        }),
        "previous" => serde_json::to_value(SuccessResponse {
            success: engine.switch_to_previous_stream().await?,
        }),
        "swap" => serde_json::to_value(SuccessResponse {
            success: engine.swap_current_focused().await?,
        }),
        other => return Err(ApiError::BadRequest(format!("Unknown command: {}", other))),
    };
    reply.map_err(|e| ApiError::BadRequest(format!("Failed to encode reply: {}", e)))
}
