//! Navigation state machine.
//!
//! Holds the current stream list and index, and turns every switch request
//! into a single call to the injected [`FocusActivator`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::dedupe::dedupe;
use crate::error::EngineError;
use crate::order::{EvictionPolicy, OrderBook};
use crate::pairing::PairBook;
use crate::source::{FocusActivator, TileSource};
use crate::status::EngineStatus;
use crate::tile::StreamEntry;

/// The stream engine: tile pipeline plus focus navigation.
pub struct StreamEngine {
    source: Arc<dyn TileSource>,
    activator: Arc<dyn FocusActivator>,
    order_book: OrderBook,
    pair_book: PairBook,
    streams: Vec<StreamEntry>,
    current_index: usize,
}

impl StreamEngine {
    pub fn new(
        source: Arc<dyn TileSource>,
        activator: Arc<dyn FocusActivator>,
        policy: EvictionPolicy,
    ) -> Self {
        Self {
            source,
            activator,
            order_book: OrderBook::new(policy),
            pair_book: PairBook::new(),
            streams: Vec::new(),
            current_index: 0,
        }
    }

    /// The tile source this engine scans.
    pub fn source(&self) -> Arc<dyn TileSource> {
        self.source.clone()
    }

    /// Current stream list.
    pub fn streams(&self) -> &[StreamEntry] {
        &self.streams
    }

    /// Current index, or `None` while the list is empty.
    pub fn current_index(&self) -> Option<usize> {
        (!self.streams.is_empty()).then_some(self.current_index)
    }

    /// Re-scan the page and rebuild the stream list. Never clicks.
    pub async fn refresh(&mut self) -> Result<Vec<StreamEntry>, EngineError> {
        let raw = self.source.scan().await?;
        let unique = dedupe(raw);
        self.pair_book.learn(&unique);
        self.streams = self.order_book.order(&unique);

        if self.current_index >= self.streams.len() {
            self.current_index = self.streams.len().saturating_sub(1);
        }

        debug!(
            streams = self.streams.len(),
            tracked = self.order_book.len(),
            "Refreshed stream list"
        );
        Ok(self.streams.clone())
    }

    /// Click the focus control of `id`.
    pub async fn switch_by_id(&mut self, id: &str) -> Result<bool, EngineError> {
        if !self.activator.activate(id).await? {
            warn!("Stream {} not found", id);
            return Ok(false);
        }

        self.current_index = self.streams.iter().position(|s| s.id == id).unwrap_or(0);
        info!("Switched to stream {} (index {})", id, self.current_index);
        Ok(true)
    }

    /// Switch to the stream at `index` of the current list.
    pub async fn switch_by_index(&mut self, index: i64) -> Result<bool, EngineError> {
        let Some(id) = usize::try_from(index)
            .ok()
            .and_then(|i| self.streams.get(i))
            .map(|s| s.id.clone())
        else {
            warn!(
                "Invalid stream index: {} (available: {})",
                index,
                self.streams.len()
            );
            return Ok(false);
        };
        self.switch_by_id(&id).await
    }

    /// Advance to the next stream, wrapping around.
    pub async fn next(&mut self) -> Result<bool, EngineError> {
        let Some(len) = self.ensure_streams().await? else {
            return Ok(false);
        };
        self.current_index = (self.current_index + 1) % len;
        self.switch_by_index(self.current_index as i64).await
    }

    /// Go back to the previous stream, wrapping around.
    pub async fn previous(&mut self) -> Result<bool, EngineError> {
        let Some(len) = self.ensure_streams().await? else {
            return Ok(false);
        };
        self.current_index = (self.current_index + len - 1) % len;
        self.switch_by_index(self.current_index as i64).await
    }

    /// Focus the partner of the current stream.
    pub async fn swap_current_focused(&mut self) -> Result<bool, EngineError> {
        if self.ensure_streams().await?.is_none() {
            return Ok(false);
        }
        let Some(id) = self.streams.get(self.current_index).map(|s| s.id.clone()) else {
            return Ok(false);
        };
        self.swap_with_partner(&id).await
    }

    /// Focus the partner of `id`.
    pub async fn swap_with_partner(&mut self, id: &str) -> Result<bool, EngineError> {
        match self.pair_book.partner_of(id).map(str::to_string) {
            Some(partner) => self.switch_by_id(&partner).await,
            None => {
                debug!("No partner known for {}", id);
                Ok(false)
            }
        }
    }

    /// Partner of `id`, if one was learned.
    pub fn partner_of(&self, id: &str) -> Option<String> {
        self.pair_book.partner_of(id).map(str::to_string)
    }

    /// Status snapshot.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            streams: self.streams.clone(),
            current_index: self.current_index,
            total_streams: self.streams.len(),
            pairs: self.pair_book.pairs(),
        }
    }

    /// Refresh if the list is empty; `None` when it stays empty.
    async fn ensure_streams(&mut self) -> Result<Option<usize>, EngineError> {
        if self.streams.is_empty() {
            self.refresh().await?;
        }
        if self.streams.is_empty() {
            warn!("No streams available");
            return Ok(None);
        }
        Ok(Some(self.streams.len()))
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
