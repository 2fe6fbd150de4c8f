//! Standardized error body.
//!
//! Every failure the API reports carries the same shape: a single short
//! message. Internal detail stays in the logs.

use serde::{Deserialize, Serialize};

/// JSON error body: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}
