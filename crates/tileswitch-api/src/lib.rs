//! # TileSwitch API
//!
//! Command bridge between remote controllers (macro pads, dashboards, the
//! page-side keyboard hook) and the stream engine.
//!
//! ```text
//!  HTTP /api/*  ──┐
//!                 ├──► EngineHandle ──► TileSource / FocusActivator ──► page
//!  WebSocket /ws ─┘          ▲
//!        ▲                   │
//!        └── StatusBroadcaster (every tick, while subscribers exist)
//!                            │
//!            AutoRefresher ──┘ (periodic refresh + shortcut hook install)
//! ```

pub mod broadcast;
pub mod error;
pub mod http;
pub mod refresh;
pub mod server;
pub mod state;
pub mod websocket;

pub use broadcast::{ErrorLogGate, StatusBroadcaster};
pub use error::ApiError;
pub use http::routes::create_router;
pub use refresh::AutoRefresher;
pub use server::{InterfaceConfig, InterfaceServer};
pub use state::AppState;
pub use websocket::{WsCommand, WsConnectionManager, WsMessage};

/// ISO-8601 UTC timestamp with millisecond precision, as used on the wire.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod testing;
