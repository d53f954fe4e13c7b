//! Stable ordering engine.
//!
//! Each id gets a durable slot the first time it is seen. Individual tiles are
//! listed by slot and grid tiles always come last, so the position of a tile
//! does not jump around when the page reorders or other tiles come and go.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::tile::{StreamEntry, TileKind, TileRecord};

/// When a tracked id that is no longer on the page loses its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Slots are never reclaimed.
    #[default]
    Never,
    /// Drop an id's slot after it was absent from this many consecutive refreshes.
    AfterAbsentRefreshes(u32),
}

impl EvictionPolicy {
    /// Build a policy from a refresh count, where 0 means "never".
    pub fn from_absent_refreshes(count: u32) -> Self {
        if count == 0 {
            Self::Never
        } else {
            Self::AfterAbsentRefreshes(count)
        }
    }
}

/// Durable id → slot assignments.
#[derive(Debug, Default)]
pub struct OrderBook {
    slots: HashMap<String, usize>,
    absent_for: HashMap<String, u32>,
    policy: EvictionPolicy,
}

impl OrderBook {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            slots: HashMap::new(),
            absent_for: HashMap::new(),
            policy,
        }
    }

    /// Slot assigned to `id`, if it is tracked.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.slots.get(id).copied()
    }

    /// Number of tracked ids.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Order a deduplicated snapshot, assigning slots to newcomers.
    pub fn order(&mut self, records: &[TileRecord]) -> Vec<StreamEntry> {
        let present: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        self.age_absent(&present);

        let (known, mut newcomers): (Vec<&TileRecord>, Vec<&TileRecord>) =
            records.iter().partition(|r| self.slots.contains_key(&r.id));

        // Stable sort: individuals first, scan order otherwise.
        newcomers.sort_by_key(|r| kind_rank(r.kind));

        let mut used: HashSet<usize> = self.slots.values().copied().collect();
        let mut placed: Vec<(usize, &TileRecord)> = known
            .into_iter()
            .filter_map(|r| self.slots.get(&r.id).map(|&slot| (slot, r)))
            .collect();

        for record in newcomers {
            let slot = lowest_free(&used);
            used.insert(slot);
            self.slots.insert(record.id.clone(), slot);
            debug!(id = %record.id, slot, "Assigned slot");
            placed.push((slot, record));
        }

        placed.sort_by_key(|(slot, r)| (kind_rank(r.kind), *slot));
        placed.into_iter().map(|(_, r)| r.to_entry()).collect()
    }

    /// Count refreshes in which tracked ids were missing and evict per policy.
    fn age_absent(&mut self, present: &HashSet<&str>) {
        self.absent_for.retain(|id, _| !present.contains(id.as_str()));

        let EvictionPolicy::AfterAbsentRefreshes(limit) = self.policy else {
            return;
        };

        let mut evicted = Vec::new();
        for id in self.slots.keys() {
            if present.contains(id.as_str()) {
                continue;
            }
            let count = self.absent_for.entry(id.clone()).or_insert(0);
            *count += 1;
            if *count >= limit {
                evicted.push(id.clone());
            }
        }

        for id in evicted {
            self.absent_for.remove(&id);
            if let Some(slot) = self.slots.remove(&id) {
                debug!(id = %id, slot, "Evicted slot after {} absent refreshes", limit);
            }
        }
    }
}

fn kind_rank(kind: TileKind) -> u8 {
    match kind {
        TileKind::Individual => 0,
        TileKind::Grid => 1,
    }
}

fn lowest_free(used: &HashSet<usize>) -> usize {
    (0..).find(|slot| !used.contains(slot)).unwrap_or(used.len())
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
