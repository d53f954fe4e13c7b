//! Expression evaluation in the target page.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::client::CdpClient;
use crate::error::CdpError;

/// Runs one expression in the target page and returns its JSON value.
#[async_trait]
pub trait RemoteEvaluator: Send + Sync {
    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError>;
}

/// Evaluator that opens a fresh DevTools connection for every expression.
///
/// Nothing is cached between calls. A timed-out call drops its half-open
/// connection, so the next call starts clean.
#[derive(Debug, Clone)]
pub struct CdpEvaluator {
    endpoint: String,
    target_url_contains: String,
    timeout: Duration,
}

impl CdpEvaluator {
    pub fn new(
        endpoint: impl Into<String>,
        target_url_contains: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            target_url_contains: target_url_contains.into(),
            timeout,
        }
    }

    async fn evaluate_once(&self, expression: &str) -> Result<Value, CdpError> {
        let client = CdpClient::connect(&self.endpoint).await?;
        let page = client.find_page(&self.target_url_contains).await?;
        let session = client.attach_page(&page.id).await?;
        debug!(
            "Evaluating in '{}' ({}) on {}, target {} session {}",
            page.title,
            page.url,
            client.browser(),
            session.target_id(),
            session.session_id()
        );
        session.evaluate(expression).await
    }
}

#[async_trait]
impl RemoteEvaluator for CdpEvaluator {
    async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        match tokio::time::timeout(self.timeout, self.evaluate_once(expression)).await {
            Ok(result) => result,
            Err(_) => Err(CdpError::Timeout(format!(
                "no answer from {} within {}ms",
                self.endpoint,
                self.timeout.as_millis()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
