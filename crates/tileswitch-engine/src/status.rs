//! Read-only status snapshot of the engine.

use serde::{Deserialize, Serialize};

use crate::tile::StreamEntry;

/// What `getStatus()` reports to the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub streams: Vec<StreamEntry>,
    pub current_index: usize,
    pub total_streams: usize,
    /// Partner entries in both directions, as `[id, partnerId]`.
    pub pairs: Vec<(String, String)>,
}
