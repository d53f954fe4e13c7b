//! Tile scanner classification.
//!
//! The page reports raw probes; this turns them into [`TileRecord`]s.

use crate::tile::{RawTileProbe, TileKind, TileRecord, TileRect};

/// Number of media surfaces from which a tile counts as a grid.
const GRID_MEDIA_THRESHOLD: u32 = 2;

/// Classify raw probes, dropping buttons whose container has no identifier.
pub fn classify(probes: Vec<RawTileProbe>) -> Vec<TileRecord> {
    probes.into_iter().filter_map(classify_one).collect()
}

fn classify_one(probe: RawTileProbe) -> Option<TileRecord> {
    let id = probe.id.filter(|id| !id.is_empty())?;

    let kind = if probe.media_count >= GRID_MEDIA_THRESHOLD || probe.grid_like {
        TileKind::Grid
    } else {
        TileKind::Individual
    };

    let name = match kind {
        TileKind::Grid => "GRID".to_string(),
        TileKind::Individual => format!("Stream {}", probe.index + 1),
    };

    let rect = probe
        .rect
        .map(|r| {
            TileRect::new(
                finite_or_zero(r.x),
                finite_or_zero(r.y),
                finite_or_zero(r.width),
                finite_or_zero(r.height),
            )
        })
        .unwrap_or_default();

    Some(TileRecord { id, name, kind, rect })
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
