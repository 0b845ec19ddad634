//! # API Errors
//!
//! Maps the error taxonomy onto HTTP:
//!
//! - schema violations -> 400 with field-level detail
//! - duplicate registration -> 409
//! - artifact unavailable -> 503
//! - artifact corrupt -> 500
//! - declared-but-unimplemented operation -> 501

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::schema::{ValidationError, Violation};
use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body violates the record schema
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Registration store failure
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Auth-layer failure (hashing)
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Declared endpoint with no behavior yet
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,

            ApiError::Store(StoreError::Duplicate { .. }) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(StoreError::Corrupt(_)) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Per-field violations on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Violation>>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        let details = match &err {
            ApiError::Validation(validation) => Some(validation.violations().to_vec()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            code,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
