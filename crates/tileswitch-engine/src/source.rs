//! Seams between the engine and the page it drives.

use async_trait::async_trait;

use crate::error::EngineError;
use crate::tile::TileRecord;

/// Produces a fresh tile snapshot of the page.
#[async_trait]
pub trait TileSource: Send + Sync {
    /// Scan the page. Read-only on the page side.
    async fn scan(&self) -> Result<Vec<TileRecord>, EngineError>;

    /// Check that the page can be reached at all.
    async fn ping(&self) -> Result<(), EngineError> {
        Ok(())
    }
}

/// The single side-effecting primitive: activate the focus control of a tile.
#[async_trait]
pub trait FocusActivator: Send + Sync {
    /// Returns `Ok(false)` when no control exists for `id`.
    async fn activate(&self, id: &str) -> Result<bool, EngineError>;
}

/// Page-side integration installed alongside the engine (keyboard hook).
#[async_trait]
pub trait PageHook: Send + Sync {
    /// Install the hook. Must be idempotent.
    async fn install(&self) -> Result<(), EngineError>;
}
