//! Automatic stream refresh.

use std::sync::Arc;
use std::time::Duration;

use tileswitch_engine::{EngineHandle, PageHook};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::broadcast::ErrorLogGate;

/// Refreshes the stream list on a timer and keeps the page-side hook installed.
pub struct AutoRefresher {
    engine: Arc<EngineHandle>,
    hook: Option<Arc<dyn PageHook>>,
    initial_delay: Duration,
    period: Option<Duration>,
    failure_log: ErrorLogGate,
}

impl AutoRefresher {
    /// `period` of zero means only the initial refresh runs.
    pub fn new(engine: Arc<EngineHandle>, initial_delay: Duration, period: Duration) -> Self {
        Self {
            engine,
            hook: None,
            initial_delay,
            period: (!period.is_zero()).then_some(period),
            failure_log: ErrorLogGate::new(Duration::from_secs(60)),
        }
    }

    /// Reinstall `hook` before every refresh. The page may have reloaded.
    pub fn with_hook(mut self, hook: Arc<dyn PageHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn with_error_log_window(mut self, window: Duration) -> Self {
        self.failure_log = ErrorLogGate::new(window);
        self
    }

    /// One refresh cycle. Failures are logged, never propagated.
    pub async fn refresh_once(&self) {
        if let Some(hook) = &self.hook {
            if let Err(e) = hook.install().await {
                debug!("Shortcut hook not installed: {}", e);
            }
        }

        match self.engine.refresh_streams().await {
            Ok(streams) => debug!("Auto-refresh found {} streams", streams.len()),
            Err(e) if self.failure_log.should_log() => warn!("Auto-refresh failed: {}", e),
            Err(e) => debug!("Auto-refresh failed: {}", e),
        }
    }

    /// Run until `shutdown` is cancelled.
    pub async fn run(self, shutdown: CancellationToken) {
        tokio::select! {
            _ = tokio::time::sleep(self.initial_delay) => {}
            _ = shutdown.cancelled() => return,
        }
        self.refresh_once().await;

        let Some(period) = self.period else {
            info!("Periodic refresh disabled");
            return;
        };
        info!("Refreshing streams every {:?}", period);
        let start = tokio::time::Instant::now() + period;
        let mut ticker = tokio::time::interval_at(start, period);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.refresh_once().await,
                _ = shutdown.cancelled() => {
                    info!("Auto-refresh shutting down");
                    break;
                }
            }
        }
    }
}
