//! Periodic status broadcast.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::state::AppState;

/// Lets a recurring failure through to the log at most once per window.
pub struct ErrorLogGate {
    window: Duration,
    last: Mutex<Option<Instant>>,
}

impl ErrorLogGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: Mutex::new(None),
        }
    }

    /// Whether this occurrence should be logged. Records it if so.
    pub fn should_log(&self) -> bool {
        let mut last = self.last.lock();
        let now = Instant::now();
        match *last {
            Some(at) if now.duration_since(at) < self.window => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

/// Pushes the status to every subscriber on a fixed tick.
pub struct StatusBroadcaster {
    state: Arc<AppState>,
    interval: Duration,
}

impl StatusBroadcaster {
    pub fn new(state: Arc<AppState>, interval: Duration) -> Self {
        Self { state, interval }
    }

    /// Probe and broadcast once. Skipped entirely when nobody listens.
    pub async fn tick(&self) -> usize {
        if self.state.connections.connection_count() == 0 {
            return 0;
        }
        let message = self.state.status_message().await;
        let delivered = self.state.connections.broadcast(&message);
        debug!("Status broadcast to {} subscribers", delivered);
        delivered
    }

    /// Run until `shutdown` is cancelled.
    pub async fn run(self, shutdown: CancellationToken) {
        info!("Status broadcast every {:?}", self.interval);
        let start = tokio::time::Instant::now() + self.interval;
        let mut ticker = tokio::time::interval_at(start, self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await;
                }
                _ = shutdown.cancelled() => {
                    info!("Status broadcast shutting down");
                    break;
                }
            }
        }
    }
}
