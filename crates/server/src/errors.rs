use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::product::ProductError;
use service::user::UserError;
use thiserror::Error;
use tracing::error;

/// Error returned by handlers: a status code plus `{"error": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }
    pub fn unauthorized() -> Self { Self::new(StatusCode::UNAUTHORIZED, "unauthorized") }
    pub fn not_found() -> Self { Self::new(StatusCode::NOT_FOUND, "not found") }

    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(error = %message, "internal error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

impl From<UserError> for JsonApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::UserExists => Self::bad_request("user already exist"),
            UserError::UserInvalid => Self::bad_request("user invalid"),
            UserError::InvalidToken(_) => Self::unauthorized(),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<ProductError> for JsonApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::Exists => Self::bad_request(ProductError::Exists.to_string()),
            ProductError::NotFound => Self::not_found(),
            other => Self::internal(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}
