//! Adapters that drive the conferencing page through a [`RemoteEvaluator`].
//!
//! [`RemoteEvaluator`]: crate::RemoteEvaluator

mod activator;
mod hook;
mod scripts;
mod tile_source;

pub use activator::PageActivator;
pub use hook::PageShortcutHook;
pub use tile_source::PageTileSource;

/// DOM selectors locating the video tiles of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelectors {
    /// Attribute on the tile container whose value is the stream id.
    pub tile_attribute: String,
    /// Selector of the focus-target control inside a tile.
    pub focus_selector: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            tile_attribute: "data-selenium-video-tile".to_string(),
            focus_selector: r#".focusTarget__54e4b[role="button"]"#.to_string(),
        }
    }
}
