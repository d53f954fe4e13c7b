//! Page session attached to a single target.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::Channel;
use crate::error::CdpError;

/// A flattened session on one page, sharing the client's connection.
pub struct PageSession {
    target_id: String,
    session_id: String,
    channel: Arc<Channel>,
}

impl PageSession {
    pub(crate) fn new(target_id: String, session_id: String, channel: Arc<Channel>) -> Self {
        Self {
            target_id,
            session_id,
            channel,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send a CDP command to this page.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, CdpError> {
        self.channel.call(method, params, Some(&self.session_id)).await
    }

    /// Evaluate an expression in the page and return its value.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        exception_text(&result).map_or_else(
            || Ok(result["result"]["value"].clone()),
            |text| Err(CdpError::JavaScript(text)),
        )
    }
}

/// The error text of a `Runtime.evaluate` result, if the expression threw.
///
/// Prefers the exception description (`TypeError: ...`) over the generic
/// `Uncaught` summary.
fn exception_text(result: &Value) -> Option<String> {
    let details = result.get("exceptionDetails")?;
    let text = details["exception"]["description"]
        .as_str()
        .or_else(|| details["text"].as_str())
        .unwrap_or("Unknown error");
    Some(text.to_string())
}
