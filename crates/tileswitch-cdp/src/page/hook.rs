//! Page-side keyboard shortcut forwarding.

use std::sync::Arc;

use async_trait::async_trait;
use tileswitch_engine::{EngineError, PageHook, ShortcutModifier};
use tracing::{debug, info};

use super::scripts;
use crate::evaluator::RemoteEvaluator;

/// [`PageHook`] installing a `keydown` listener that posts modifier chords to
/// the bridge. Installing twice with the same URL is a no-op in the page.
///
/// The page itself calls `fetch` on the bridge, so a `connect-src` policy that
/// excludes the bridge origin blocks forwarding. Each blocked chord is reported
/// with `console.warn` in the page's DevTools console.
pub struct PageShortcutHook {
    evaluator: Arc<dyn RemoteEvaluator>,
    bridge_url: String,
    modifier: ShortcutModifier,
}

impl PageShortcutHook {
    /// `bridge_url` is the full URL of the shortcut endpoint.
    pub fn new(
        evaluator: Arc<dyn RemoteEvaluator>,
        bridge_url: impl Into<String>,
        modifier: ShortcutModifier,
    ) -> Self {
        Self {
            evaluator,
            bridge_url: bridge_url.into(),
            modifier,
        }
    }
}

/// JS condition over the event `e` that holds for exactly this modifier set.
fn modifier_condition(modifier: ShortcutModifier) -> &'static str {
    match modifier {
        ShortcutModifier::Alt => "e.altKey && !e.ctrlKey && !e.shiftKey && !e.metaKey",
        ShortcutModifier::Ctrl => "e.ctrlKey && !e.altKey && !e.shiftKey && !e.metaKey",
        ShortcutModifier::CtrlShift => "e.ctrlKey && e.shiftKey && !e.altKey && !e.metaKey",
        ShortcutModifier::Meta => "e.metaKey && !e.altKey && !e.ctrlKey && !e.shiftKey",
    }
}

#[async_trait]
impl PageHook for PageShortcutHook {
    async fn install(&self) -> Result<(), EngineError> {
        let script = scripts::install_hook(&self.bridge_url, modifier_condition(self.modifier));
        let installed = self.evaluator.evaluate(&script).await?;
        if installed.as_bool() == Some(true) {
            info!(
                "Keyboard shortcuts ({}) forwarding to {}",
                self.modifier, self.bridge_url
            );
        } else {
            debug!("Keyboard shortcuts already installed");
        }
        Ok(())
    }
}
