//! Fieldguide — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fieldguide_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A domain error from the catalog or a session.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No mounted session has this ID.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// Mounting would exceed the configured session cap.
    #[error("session limit of {0} reached")]
    SessionLimitReached(usize),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Domain(DomainError::SubjectNotFound(_)) => {
                (StatusCode::NOT_FOUND, "subject_not_found")
            }
            Self::Domain(DomainError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            Self::Domain(DomainError::Infrastructure(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
            Self::SessionNotFound(_) => (StatusCode::NOT_FOUND, "session_not_found"),
            Self::SessionLimitReached(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "session_limit_reached")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
