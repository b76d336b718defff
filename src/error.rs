/*
 * Responsibility
 * - App-wide AppError (DecodeError / anything unexpected)
 * - Failure envelope `{ success: false, error }` and its HTTP status
 * - IntoResponse for the forwarded-request adapter; the invocation adapter
 *   renders the same status/envelope into its output binding
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::client_principal::DecodeError;

pub const FALLBACK_MESSAGE: &str = "Failed to run hello world";

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the failure and builds the body returned to the caller.
    pub fn envelope(&self) -> ErrorEnvelope {
        tracing::error!(error = %self, "hello world failed");

        let message = self.to_string();
        ErrorEnvelope {
            success: false,
            error: if message.trim().is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}
