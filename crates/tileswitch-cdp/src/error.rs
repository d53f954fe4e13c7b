//! CDP error types.

use thiserror::Error;
use tileswitch_engine::EngineError;

/// Remediation shown whenever the page cannot be reached.
pub const REMOTE_DEBUGGING_HINT: &str =
    "Ensure Discord is running with --remote-debugging-port=9222 and a call is open";

/// CDP client errors.
#[derive(Debug, Error)]
pub enum CdpError {
    /// Failed to connect to the browser WebSocket.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Nothing answers on the remote-debugging HTTP endpoint.
    #[error("Remote debugging endpoint not available at {0}")]
    EndpointNotAvailable(String),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// CDP protocol error.
    #[error("CDP error: {message} (code: {code})")]
    Protocol { code: i64, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error (for endpoint discovery).
    #[error("HTTP error: {0}")]
    Http(String),

    /// No open page matches the target filter.
    #[error("No page matching '{0}' is open")]
    PageNotFound(String),

    /// The expression threw inside the page.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Timeout.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Session closed.
    #[error("Session closed")]
    SessionClosed,

    /// Invalid response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for CdpError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        CdpError::WebSocket(e.to_string())
    }
}

impl From<reqwest::Error> for CdpError {
    fn from(e: reqwest::Error) -> Self {
        CdpError::Http(e.to_string())
    }
}

impl From<url::ParseError> for CdpError {
    fn from(e: url::ParseError) -> Self {
        CdpError::ConnectionFailed(format!("Invalid URL: {}", e))
    }
}

impl From<CdpError> for EngineError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::JavaScript(message) => EngineError::Evaluation(message),
            other => EngineError::transport(other.to_string(), REMOTE_DEBUGGING_HINT),
        }
    }
}
