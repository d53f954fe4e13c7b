//! Partner pairing heuristic.
//!
//! With exactly two individual tiles on screen and one clearly bigger than the
//! other, the layout is a primary/secondary view and the two are partners.

use std::collections::BTreeMap;

use tracing::debug;

use crate::tile::TileRecord;

/// Minimum big/small area ratio for two tiles to be paired.
pub const PAIR_RATIO_THRESHOLD: f64 = 2.0;

/// Symmetric id → partner id mapping.
#[derive(Debug, Default, Clone)]
pub struct PairBook {
    partners: BTreeMap<String, String>,
}

impl PairBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn from a deduplicated snapshot. Does nothing unless it holds exactly
    /// two individual tiles with usable, clearly different areas.
    pub fn learn(&mut self, records: &[TileRecord]) {
        let individuals: Vec<&TileRecord> = records.iter().filter(|r| r.kind.is_individual()).collect();
        let [a, b] = individuals.as_slice() else {
            return;
        };

        let (area_a, area_b) = (a.rect.area, b.rect.area);
        if area_a <= 0.0 || area_b <= 0.0 {
            return;
        }

        let ratio = area_a.max(area_b) / area_a.min(area_b).max(1.0);
        if ratio < PAIR_RATIO_THRESHOLD {
            return;
        }

        let (big, small) = if area_a >= area_b { (a, b) } else { (b, a) };
        self.link(&big.id, &small.id);
        debug!(big = %big.id, small = %small.id, ratio, "Learned partner pair");
    }

    /// Partner of `id`, if one was learned.
    pub fn partner_of(&self, id: &str) -> Option<&str> {
        self.partners.get(id).map(String::as_str)
    }

    /// All entries in both directions, ordered by id.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.partners
            .iter()
            .map(|(id, partner)| (id.clone(), partner.clone()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    fn link(&mut self, big: &str, small: &str) {
        for id in [big, small] {
            if let Some(previous) = self.partners.remove(id) {
                if self.partners.get(&previous).map(String::as_str) == Some(id) {
                    self.partners.remove(&previous);
                }
            }
        }
        self.partners.insert(big.to_string(), small.to_string());
        self.partners.insert(small.to_string(), big.to_string());
    }
}
