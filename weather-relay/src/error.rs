//! API error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream call or response handling failed.
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        /// Whether `message` may be returned to the client.
        expose: bool,
    },
}

impl ApiError {
    pub fn internal(err: &anyhow::Error, expose: bool) -> Self {
        // `{:#}` keeps the whole context chain on one line.
        Self::Internal { message: format!("{err:#}"), expose }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse { error: message, code: "bad_request".to_string(), details: None },
            ),
            Self::Internal { message, expose } => {
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "An internal error occurred".to_string(),
                        code: "internal_error".to_string(),
                        details: expose.then_some(message),
                    },
                )
            },
        };

        (status, Json(body)).into_response()
    }
}
