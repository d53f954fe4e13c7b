//! Page fakes for bridge tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tileswitch_engine::{
    EngineError, EngineHandle, EvictionPolicy, FocusActivator, PageHook, ShortcutMap,
    StreamEngine, TileKind, TileRecord, TileRect, TileSource,
};

use crate::state::AppState;

#[derive(Default)]
pub(crate) struct FakePage {
    tiles: Mutex<Vec<TileRecord>>,
    clicks: Mutex<Vec<String>>,
    installs: Mutex<usize>,
    unreachable: Mutex<bool>,
}

impl FakePage {
    /// Individual tiles of equal size, in page order.
    pub(crate) fn with_ids(ids: &[&str]) -> Self {
        let page = Self::default();
        *page.tiles.lock() = ids
            .iter()
            .map(|id| {
                TileRecord::new(*id, format!("Stream {}", id), TileKind::Individual, TileRect::new(0.0, 0.0, 10.0, 10.0))
            })
            .collect();
        page
    }

    pub(crate) fn with_tiles(tiles: Vec<TileRecord>) -> Self {
        let page = Self::default();
        *page.tiles.lock() = tiles;
        page
    }

    pub(crate) fn set_unreachable(&self, unreachable: bool) {
        *self.unreachable.lock() = unreachable;
    }

    pub(crate) fn clicks(&self) -> Vec<String> {
        self.clicks.lock().clone()
    }

    pub(crate) fn installs(&self) -> usize {
        *self.installs.lock()
    }

    fn check_reachable(&self) -> Result<(), EngineError> {
        if *self.unreachable.lock() {
            return Err(EngineError::transport(
                "Connection refused",
                "Ensure Discord is running with --remote-debugging-port=9222",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TileSource for FakePage {
    async fn scan(&self) -> Result<Vec<TileRecord>, EngineError> {
        self.check_reachable()?;
        Ok(self.tiles.lock().clone())
    }

    async fn ping(&self) -> Result<(), EngineError> {
        self.check_reachable()
    }
}

#[async_trait]
impl FocusActivator for FakePage {
    async fn activate(&self, id: &str) -> Result<bool, EngineError> {
        self.check_reachable()?;
        if !self.tiles.lock().iter().any(|t| t.id == id) {
            return Ok(false);
        }
        self.clicks.lock().push(id.to_string());
        Ok(true)
    }
}

#[async_trait]
impl PageHook for FakePage {
    async fn install(&self) -> Result<(), EngineError> {
        self.check_reachable()?;
        *self.installs.lock() += 1;
        Ok(())
    }
}

pub(crate) fn handle_over(page: &Arc<FakePage>) -> Arc<EngineHandle> {
    Arc::new(EngineHandle::new(StreamEngine::new(
        page.clone(),
        page.clone(),
        EvictionPolicy::Never,
    )))
}

pub(crate) fn state_over(page: &Arc<FakePage>) -> Arc<AppState> {
    Arc::new(AppState::new(handle_over(page), ShortcutMap::default()))
}
