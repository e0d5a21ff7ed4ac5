use crate::types::DbId;

/// Error taxonomy surfaced by every store operation.
///
/// `Conflict` and `NotFound` are recoverable by the caller.
/// `Unavailable` is propagated as-is; retry policy belongs to the
/// caller, not this layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
