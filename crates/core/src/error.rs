use crate::types::DbId;

/// Domain-level error type shared across all Veritas crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An external verdict collaborator returned unusable output.
    #[error("Processing failed: {0}")]
    Processing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
