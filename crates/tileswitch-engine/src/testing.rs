//! In-memory page fakes for engine tests.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::EngineError;
use crate::source::{FocusActivator, TileSource};
use crate::tile::{TileKind, TileRecord, TileRect};

pub(crate) fn individual(id: &str, area: f64) -> TileRecord {
    let side = area.sqrt();
    TileRecord::new(id, format!("Stream {}", id), TileKind::Individual, TileRect::new(0.0, 0.0, side, side))
}

pub(crate) fn grid(id: &str) -> TileRecord {
    TileRecord::new(id, "GRID", TileKind::Grid, TileRect::new(0.0, 0.0, 10.0, 10.0))
}

/// A page whose tiles can be swapped between scans.
#[derive(Default)]
pub(crate) struct FakePage {
    tiles: Mutex<Vec<TileRecord>>,
    clicks: Mutex<Vec<String>>,
    scans: Mutex<usize>,
    unreachable: Mutex<bool>,
}

impl FakePage {
    pub(crate) fn with_tiles(tiles: Vec<TileRecord>) -> Self {
        let page = Self::default();
        page.set_tiles(tiles);
        page
    }

    pub(crate) fn set_tiles(&self, tiles: Vec<TileRecord>) {
        *self.tiles.lock() = tiles;
    }

    pub(crate) fn set_unreachable(&self, unreachable: bool) {
        *self.unreachable.lock() = unreachable;
    }

    pub(crate) fn clicks(&self) -> Vec<String> {
        self.clicks.lock().clone()
    }

    pub(crate) fn scan_count(&self) -> usize {
        *self.scans.lock()
    }

    fn check_reachable(&self) -> Result<(), EngineError> {
        if *self.unreachable.lock() {
            return Err(EngineError::transport("connection refused", "start the page"));
        }
        Ok(())
    }
}

#[async_trait]
impl TileSource for FakePage {
    async fn scan(&self) -> Result<Vec<TileRecord>, EngineError> {
        self.check_reachable()?;
        *self.scans.lock() += 1;
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
        let live: HashSet<String> = self.tiles.lock().iter().map(|t| t.id.clone()).collect();
        if !live.contains(id) {
            return Ok(false);
        }
        self.clicks.lock().push(id.to_string());
        Ok(true)
    }
}
