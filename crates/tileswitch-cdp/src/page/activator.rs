//! Focus activation in the page.

use std::sync::Arc;

use async_trait::async_trait;
use tileswitch_engine::{EngineError, FocusActivator};

use super::{scripts, PageSelectors};
use crate::evaluator::RemoteEvaluator;

/// [`FocusActivator`] that clicks the tile's focus control in the page.
pub struct PageActivator {
    evaluator: Arc<dyn RemoteEvaluator>,
    selectors: PageSelectors,
}

impl PageActivator {
    pub fn new(evaluator: Arc<dyn RemoteEvaluator>, selectors: PageSelectors) -> Self {
        Self {
            evaluator,
            selectors,
        }
    }
}

#[async_trait]
impl FocusActivator for PageActivator {
    async fn activate(&self, id: &str) -> Result<bool, EngineError> {
        let value = self
            .evaluator
            .evaluate(&scripts::activate(&self.selectors, id))
            .await?;
        value
            .as_bool()
            .ok_or_else(|| EngineError::Evaluation(format!("expected a boolean, got {}", value)))
    }
}
