//! WebSocket status channel.
//!
//! Subscribers receive `stream_status` / `discord_error` pushes and may send
//! `{command, params}` requests that mirror the REST endpoints.

mod commands;
mod connection;
mod handler;
mod message;

pub use commands::dispatch;
pub use connection::WsConnectionManager;
pub use handler::ws_handler;
pub use message::{WsCommand, WsMessage};
