//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catpoint_domain::error::{CatpointError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CatpointError`] and request-body rejections to an HTTP response
/// with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// The security service refused the operation.
    Service(CatpointError),
    /// The request body could not be read (e.g. a frame over the size limit).
    Body(BytesRejection),
}

impl From<CatpointError> for ApiError {
    fn from(err: CatpointError) -> Self {
        Self::Service(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Service(err.into())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Service(CatpointError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Service(CatpointError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            // Already logged by the security service.
            Self::Service(CatpointError::Detector(_)) => (
                StatusCode::BAD_GATEWAY,
                "cat detector unavailable".to_string(),
            ),
            Self::Service(CatpointError::Listener(err)) => {
                tracing::error!(error = %err, "listener error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
