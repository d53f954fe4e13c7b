//! Tile records and the stream entries derived from them.

use serde::{Deserialize, Serialize};

/// Whether a tile shows one participant or a composite grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Individual,
    Grid,
}

impl TileKind {
    pub fn is_individual(self) -> bool {
        self == Self::Individual
    }
}

/// Bounding rectangle of a tile, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TileRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
}

impl TileRect {
    /// Build a rectangle; negative extents count as zero for the area.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            area: width.max(0.0) * height.max(0.0),
        }
    }
}

/// One tile as seen by a single scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    pub id: String,
    pub name: String,
    pub kind: TileKind,
    pub rect: TileRect,
}

impl TileRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: TileKind, rect: TileRect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            rect,
        }
    }

    /// The externally visible part of the record.
    pub fn to_entry(&self) -> StreamEntry {
        StreamEntry {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
        }
    }
}

/// An element of the ordered stream list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    pub id: String,
    pub name: String,
    pub kind: TileKind,
}

/// Geometry as reported by the page; any field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeRect {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

/// Raw facts about one focus-target button, before classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTileProbe {
    /// Position of the button among all matching buttons.
    pub index: usize,
    /// Identifier of the enclosing tile container, if it has one.
    #[serde(default)]
    pub id: Option<String>,
    /// Number of `video`/`canvas` surfaces inside the tile.
    #[serde(default)]
    pub media_count: u32,
    /// Whether the tile carries a grid/gallery class signature.
    #[serde(default)]
    pub grid_like: bool,
    /// `None` when the geometry could not be read.
    #[serde(default)]
    pub rect: Option<ProbeRect>,
}
