//! Error handling - maps domain and repository failures to HTTP responses.
//!
//! Every error body has the shape `{"message": "..."}`. Internal detail is
//! logged and never returned to the caller.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// Validation failure on a user payload. Same body shape as
    /// `BadRequest` but surfaces as 422 per the public contract.
    Unprocessable(String),
    Unauthorized,
    NotFound,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(msg) | AppError::Unprocessable(msg) => ErrorResponse::new(msg),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::NotFound => ErrorResponse::not_found(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<quill_core::error::DomainError> for AppError {
    fn from(err: quill_core::error::DomainError) -> Self {
        use quill_core::error::DomainError;

        match err {
            DomainError::MissingBody => AppError::BadRequest(err.to_string()),
            DomainError::MissingField(_)
            | DomainError::IncorrectFieldType(_)
            | DomainError::IncorrectFieldLength(_) => AppError::Unprocessable(err.to_string()),
            DomainError::MissingKey(_) => AppError::BadRequest(err.to_string()),
            // Duplicate usernames surface as 400 per the public contract.
            DomainError::Duplicate(msg) => AppError::BadRequest(msg),
            DomainError::NotFound { .. } => AppError::NotFound,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<quill_core::error::RepoError> for AppError {
    fn from(err: quill_core::error::RepoError) -> Self {
        use quill_core::error::RepoError;

        match err {
            RepoError::NotFound => AppError::NotFound,
            // The only unique constraint in the schema is users.username.
            RepoError::Constraint(_) => AppError::BadRequest("username taken".to_string()),
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!("Database error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
