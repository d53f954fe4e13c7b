//! # TileSwitch Engine
//!
//! Stream identity and ordering for the video tiles of a conferencing page.
//!
//! Every refresh runs the same pipeline over a fresh snapshot of the page:
//!
//! ```text
//! TileSource::scan ──► dedupe ──► PairBook::learn ──► OrderBook::order ──► StreamList
//!                                                                              │
//!            FocusActivator::activate ◄── navigation (by id / index / next / swap)
//! ```
//!
//! The `OrderBook` and `PairBook` outlive individual refreshes so that button N
//! keeps pointing at the same participant while tiles come and go.

mod dedupe;
mod error;
mod handle;
mod navigation;
mod order;
mod pairing;
mod scanner;
mod shortcuts;
mod source;
mod status;
mod tile;

pub use dedupe::dedupe;
pub use error::EngineError;
pub use handle::EngineHandle;
pub use navigation::StreamEngine;
pub use order::{EvictionPolicy, OrderBook};
pub use pairing::{PairBook, PAIR_RATIO_THRESHOLD};
pub use scanner::classify;
pub use shortcuts::{KeyChord, ShortcutAction, ShortcutMap, ShortcutModifier};
pub use source::{FocusActivator, PageHook, TileSource};
pub use status::EngineStatus;
pub use tile::{ProbeRect, RawTileProbe, StreamEntry, TileKind, TileRecord, TileRect};

#[cfg(test)]
mod testing;
