//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_types::ErrorResponse;

/// Application error type that wraps the JSON error body
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: &'static str,
    inner: ErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, msg: &str) -> Self {
        Self {
            status,
            code,
            inner: ErrorResponse {
                error: msg.to_string(),
            },
        }
    }

    /// The 500 returned when fault injection decides a request should fail
    #[must_use]
    pub fn injected_failure() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "injected_failure",
            "Internal Server Error. Please try again later.",
        )
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.code, self.inner.error),
            500..=599 => tracing::error!("Server error: {} - {}", self.code, self.inner.error),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

impl OperationOutput for AppError {
    type Inner = ErrorResponse;
}
