//! Test doubles.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::error::CdpError;
use crate::evaluator::RemoteEvaluator;

/// Evaluator answering every expression the same way and recording it.
pub struct FakeEvaluator {
    answer: Box<dyn Fn() -> Result<Value, CdpError> + Send + Sync>,
    expressions: Mutex<Vec<String>>,
}

impl FakeEvaluator {
    pub fn returning(value: Value) -> Self {
        Self {
            answer: Box::new(move || Ok(value.clone())),
            expressions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> CdpError + Send + Sync + 'static) -> Self {
        Self {
            answer: Box::new(move || Err(error())),
            expressions: Mutex::new(Vec::new()),
        }
    }

    pub fn expressions(&self) -> Vec<String> {
        self.expressions.lock().clone()
    }
}

#[async_trait]
impl RemoteEvaluator for FakeEvaluator {
    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        self.expressions.lock().push(expression.to_string());
        (self.answer)()
    }
}
