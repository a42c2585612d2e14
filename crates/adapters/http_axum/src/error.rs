//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bank_domain::error::{BankError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BankError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(BankError);

impl From<BankError> for ApiError {
    fn from(err: BankError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(BankError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BankError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            BankError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            BankError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
