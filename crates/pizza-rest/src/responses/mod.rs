//! API response types.
//!
//! Successful mutations answer `200` with an empty body; reads answer JSON.
//! Every error answers a `text/plain` body carrying the error message.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use pizza_core::PizzaError;
use tracing::{debug, error};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub PizzaError);

impl From<PizzaError> for AppError {
    fn from(err: PizzaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "Request failed: {}", self.0);
        } else {
            debug!(code = self.0.error_code(), "Request rejected: {}", self.0);
        }

        let mut response = (status, format!("{}\n", self.0)).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        response
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;
