//! WebSocket subscriber registry.

use dashmap::DashMap;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use super::message::WsMessage;

/// Registered subscribers, each fed through its own outbound text queue.
pub struct WsConnectionManager {
    connections: DashMap<String, mpsc::Sender<String>>,
}

impl WsConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    pub fn add(&self, id: String, sender: mpsc::Sender<String>) {
        self.connections.insert(id, sender);
    }

    pub fn remove(&self, id: &str) {
        self.connections.remove(id);
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Queue `message` for every subscriber. Returns how many accepted it.
    ///
    /// Never waits: a subscriber whose queue is full misses this frame.
    pub fn broadcast(&self, message: &WsMessage) -> usize {
        let text = match message.to_json() {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to serialize broadcast: {}", e);
                return 0;
            }
        };
        let mut delivered = 0;
        for entry in self.connections.iter() {
            match entry.value().try_send(text.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    debug!("Subscriber {} is not reading, frame dropped", entry.key());
                }
                Err(TrySendError::Closed(_)) => {}
            }
        }
        delivered
    }
}

impl Default for WsConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}
