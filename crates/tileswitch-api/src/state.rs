//! Application state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tileswitch_engine::{EngineHandle, ShortcutMap};
use tracing::{debug, warn};

use crate::broadcast::ErrorLogGate;
use crate::timestamp;
use crate::websocket::{WsConnectionManager, WsMessage};

/// Application state shared across handlers and background tasks.
pub struct AppState {
    pub engine: Arc<EngineHandle>,
    pub shortcuts: ShortcutMap,
    pub connections: WsConnectionManager,
    not_ready_log: ErrorLogGate,
    start_time: Instant,
}

impl AppState {
    pub fn new(engine: Arc<EngineHandle>, shortcuts: ShortcutMap) -> Self {
        Self {
            engine,
            shortcuts,
            connections: WsConnectionManager::new(),
            not_ready_log: ErrorLogGate::new(Duration::from_secs(60)),
            start_time: Instant::now(),
        }
    }

    /// Minimum time between two "not ready" warnings.
    pub fn with_error_log_window(mut self, window: Duration) -> Self {
        self.not_ready_log = ErrorLogGate::new(window);
        self
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Probe the page and build the message pushed to status subscribers.
    pub async fn status_message(&self) -> WsMessage {
        match self.engine.check_connected().await {
            Ok(()) => WsMessage::StreamStatus {
                data: self.engine.get_status().await,
                timestamp: timestamp(),
            },
            Err(e) => {
                if self.not_ready_log.should_log() {
                    warn!("Discord not ready: {}", e);
                } else {
                    debug!("Discord still not ready: {}", e);
                }
                WsMessage::DiscordError {
                    error: e.to_string(),
                    timestamp: timestamp(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{state_over, FakePage};

    #[tokio::test]
    async fn test_status_message_connected() {
        let page = Arc::new(FakePage::with_ids(&["a", "b"]));
        let state = state_over(&page);
        state.engine.refresh_streams().await.unwrap();

        match state.status_message().await {
            WsMessage::StreamStatus { data, .. } => assert_eq!(data.total_streams, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_status_message_not_ready() {
        let page = Arc::new(FakePage::with_ids(&[]));
        page.set_unreachable(true);
        let state = state_over(&page);

        match state.status_message().await {
            WsMessage::DiscordError { error, .. } => assert!(error.contains("remote-debugging")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_uptime_advances() {
        let page = Arc::new(FakePage::with_ids(&[]));
        let state = state_over(&page);
        std::thread::sleep(Duration::from_millis(10));
        assert!(state.uptime().as_millis() >= 10);
    }
}
