//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::monitoring;
use crate::state::AppState;
use crate::websocket::ws_handler;

/// Build the bridge router.
///
/// ```text
/// GET  /health                            - Liveness
/// GET  /api/discord/status                - Page reachability (503 when down)
///
/// GET  /api/streams                       - Engine status
/// POST /api/streams/refresh               - Rescan, then status
/// POST /api/streams/switch-by-id/{id}     - Focus a stream by id
/// POST /api/streams/switch-by-index/{i}   - Focus a stream by position
/// POST /api/streams/next                  - Focus the next stream
/// POST /api/streams/previous              - Focus the previous stream
/// POST /api/streams/swap                  - Focus the partner of the current stream
/// POST /api/stream-deck/button/{n}        - Button n (1..32) -> index n-1
/// POST /api/shortcut                      - Key chord from the page-side hook
///
/// GET  /ws, /                             - Status channel (WebSocket)
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let stream_routes = Router::new()
        .route("/api/streams", get(handlers::get_streams))
        .route("/api/streams/refresh", post(handlers::refresh_streams))
        .route("/api/streams/switch-by-id/{id}", post(handlers::switch_by_id))
        .route("/api/streams/switch-by-index/{index}", post(handlers::switch_by_index))
        .route("/api/streams/next", post(handlers::next_stream))
        .route("/api/streams/previous", post(handlers::previous_stream))
        .route("/api/streams/swap", post(handlers::swap_focused))
        .route("/api/stream-deck/button/{n}", post(handlers::stream_deck_button))
        .route("/api/shortcut", post(handlers::shortcut));

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health))
        .route("/api/discord/status", get(monitoring::discord_status));

    let ws_routes = Router::new()
        .route("/ws", get(ws_handler))
        .route("/", get(ws_handler));

    Router::new()
        .merge(stream_routes)
        .merge(monitoring_routes)
        .merge(ws_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
