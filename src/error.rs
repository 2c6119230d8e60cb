//! Application error type and its HTTP representation.
//!
//! Every error leaving a handler is rendered with the same body shape the
//! browser form understands:
//!
//! ```json
//! { "success": false, "errors": ["All fields are required"] }
//! ```

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when any credential field is absent or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// Errors produced while relaying a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller sent an incomplete payload (400).
    #[error("{0}")]
    Validation(String),

    /// Parsing the request, reaching the upstream API or decoding its reply failed (500).
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl AppError {
    pub fn missing_fields() -> Self {
        Self::Validation(MISSING_FIELDS_MESSAGE.to_string())
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RequestFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub errors: Vec<String>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            success: false,
            errors: vec![err.to_string()],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(&self));

        match self {
            AppError::Validation(_) => (status, body).into_response(),
            AppError::RequestFailed(ref message) => {
                tracing::error!(error = %message, "Relay request failed");
                (
                    status,
                    [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                    body,
                )
                    .into_response()
            }
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RequestFailed(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::missing_fields()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::RequestFailed(err.to_string())
    }
}
