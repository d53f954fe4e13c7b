//! WebSocket connection handling.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::commands::dispatch;
use super::message::WsCommand;
use crate::state::AppState;

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = Uuid::new_v4().to_string();
    info!("Status subscriber connected: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<String>(32);
    state.connections.add(connection_id.clone(), tx.clone());

    let sender_task = tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            if sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    // Initial push, so a fresh subscriber does not wait for the next tick.
    match state.status_message().await.to_json() {
        Ok(text) => {
            let _ = tx.send(text).await;
        }
        Err(e) => warn!("Failed to encode initial status: {}", e),
    }

    while let Some(result) = receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                debug!("Received from {}: {}", connection_id, text);
                let reply = match serde_json::from_str::<WsCommand>(&text) {
                    Ok(cmd) => match dispatch(&state, &cmd).await {
                        Ok(value) => value,
                        Err(e) => json!({ "error": e.to_string() }),
                    },
                    Err(e) => json!({ "error": format!("Invalid command: {}", e) }),
                };
                if tx.send(reply.to_string()).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Err(e) => {
                debug!("WebSocket error on {}: {}", connection_id, e);
                break;
            }
            _ => {}
        }
    }

    state.connections.remove(&connection_id);
    sender_task.abort();
    info!("Status subscriber disconnected: {}", connection_id);
}
