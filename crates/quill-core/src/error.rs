//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
///
/// The validation variants carry the exact wording the API contract exposes,
/// so the HTTP layer only has to pick a status code.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No request body")]
    MissingBody,

    /// A required field is absent from a user payload.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but not a string.
    #[error("Incorrect field type: {0}")]
    IncorrectFieldType(&'static str),

    /// A string field is present but empty.
    #[error("Incorrect field length: {0}")]
    IncorrectFieldLength(&'static str),

    /// A required key is absent from a post payload.
    #[error("Missing `{0}` in request body")]
    MissingKey(&'static str),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
