//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: i32 },

    /// One message per offending field.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: i32) -> Self {
        Self::NotFound { entity_type, id }
    }
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

    #[error("Constraint violation on {field}: {detail}")]
    Constraint { field: &'static str, detail: String },
}

impl RepoError {
    pub fn constraint(field: &'static str, detail: impl Into<String>) -> Self {
        Self::Constraint {
            field,
            detail: detail.into(),
        }
    }
}
