//! Tile snapshots read from the page.

use std::sync::Arc;

use async_trait::async_trait;
use tileswitch_engine::{classify, EngineError, RawTileProbe, TileRecord, TileSource};
use tracing::debug;

use super::{scripts, PageSelectors};
use crate::evaluator::RemoteEvaluator;

/// [`TileSource`] that scans the live page.
///
/// The page only reports raw probes. Classification into individual and grid
/// tiles happens here so the rules are testable without a browser.
pub struct PageTileSource {
    evaluator: Arc<dyn RemoteEvaluator>,
    selectors: PageSelectors,
}

impl PageTileSource {
    pub fn new(evaluator: Arc<dyn RemoteEvaluator>, selectors: PageSelectors) -> Self {
        Self {
            evaluator,
            selectors,
        }
    }
}

#[async_trait]
impl TileSource for PageTileSource {
    async fn scan(&self) -> Result<Vec<TileRecord>, EngineError> {
        let value = self.evaluator.evaluate(&scripts::scan(&self.selectors)).await?;
        let probes: Vec<RawTileProbe> = serde_json::from_value(value)
            .map_err(|e| EngineError::InvalidSnapshot(e.to_string()))?;
        let count = probes.len();
        let records = classify(probes);
        debug!("Scanned {} focus controls, {} tiles", count, records.len());
        Ok(records)
    }

    async fn ping(&self) -> Result<(), EngineError> {
        self.evaluator.evaluate(scripts::PING).await?;
        Ok(())
    }
}
