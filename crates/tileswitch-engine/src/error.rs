//! Engine error types.

use thiserror::Error;

/// Errors surfaced by engine operations.
///
/// A missing tile or an out-of-range index is not an error; those
/// operations return `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The remote-evaluation channel could not reach the page.
    #[error("{message}. {hint}")]
    Transport { message: String, hint: String },

    /// The evaluated expression threw inside the page.
    #[error("Page script error: {0}")]
    Evaluation(String),

    /// The page answered with something that is not a tile snapshot.
    #[error("Invalid tile snapshot: {0}")]
    InvalidSnapshot(String),
}

impl EngineError {
    /// Create a transport error with a remediation hint.
    pub fn transport(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Whether the error means the page is unreachable.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
