//! Bridge error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tileswitch_engine::EngineError;

use crate::timestamp;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input, rejected before the engine is touched.
    #[error("{0}")]
    BadRequest(String),

    /// The page cannot be reached (status probe only).
    #[error("{0}")]
    Disconnected(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Disconnected(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::Disconnected(message) => json!({
                "status": "disconnected",
                "message": message,
                "timestamp": timestamp(),
            }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
