//! Shared handle to the engine.
//!
//! Constructed once at startup and handed to the bridge. The async mutex makes
//! every public operation run to completion before the next one starts.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::EngineError;
use crate::navigation::StreamEngine;
use crate::shortcuts::ShortcutAction;
use crate::source::TileSource;
use crate::status::EngineStatus;
use crate::tile::StreamEntry;

/// Command surface of the engine.
pub struct EngineHandle {
    engine: Mutex<StreamEngine>,
    source: Arc<dyn TileSource>,
}

impl EngineHandle {
    pub fn new(engine: StreamEngine) -> Self {
        let source = engine.source();
        Self {
            engine: Mutex::new(engine),
            source,
        }
    }

    /// Check that the page is reachable. Does not wait for running operations.
    pub async fn check_connected(&self) -> Result<(), EngineError> {
        self.source.ping().await
    }

    pub async fn refresh_streams(&self) -> Result<Vec<StreamEntry>, EngineError> {
        self.engine.lock().await.refresh().await
    }

    pub async fn switch_to_stream_by_id(&self, id: &str) -> Result<bool, EngineError> {
        self.engine.lock().await.switch_by_id(id).await
    }

    pub async fn switch_to_stream_by_index(&self, index: i64) -> Result<bool, EngineError> {
        self.engine.lock().await.switch_by_index(index).await
    }

    pub async fn switch_to_next_stream(&self) -> Result<bool, EngineError> {
        self.engine.lock().await.next().await
    }

    pub async fn switch_to_previous_stream(&self) -> Result<bool, EngineError> {
        self.engine.lock().await.previous().await
    }

    pub async fn swap_current_focused(&self) -> Result<bool, EngineError> {
        self.engine.lock().await.swap_current_focused().await
    }

    pub async fn swap_with_partner(&self, id: &str) -> Result<bool, EngineError> {
        self.engine.lock().await.swap_with_partner(id).await
    }

    pub async fn partner_of(&self, id: &str) -> Option<String> {
        self.engine.lock().await.partner_of(id)
    }

    pub async fn get_status(&self) -> EngineStatus {
        self.engine.lock().await.status()
    }

    /// Run the action bound to a keyboard shortcut.
    pub async fn run_shortcut(&self, action: ShortcutAction) -> Result<bool, EngineError> {
        match action {
            ShortcutAction::SwitchIndex { index } => {
                self.switch_to_stream_by_index(index as i64).await
            }
            ShortcutAction::Next => self.switch_to_next_stream().await,
            ShortcutAction::Previous => self.switch_to_previous_stream().await,
            ShortcutAction::SwapFocused => self.swap_current_focused().await,
        }
    }
}
