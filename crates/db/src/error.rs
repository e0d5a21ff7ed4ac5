//! Classification of storage errors into the domain taxonomy.
//!
//! Every repository method maps its `sqlx::Error` through here exactly
//! once, so callers only ever see [`CoreError`] kinds.

use quizdeck_core::error::CoreError;

/// PostgreSQL error code for a unique constraint violation.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Map a sqlx error into [`CoreError`].
///
/// Unique constraint violations (constraint name starting with `uq_`)
/// become [`CoreError::Conflict`]. Everything else is logged and
/// surfaced as [`CoreError::Unavailable`].
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return CoreError::Conflict(format!(
                        "Duplicate value violates unique constraint: {constraint}"
                    ));
                }
            }
            tracing::error!(error = %db_err, "Database error");
            CoreError::Unavailable(db_err.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            CoreError::Unavailable(other.to_string())
        }
    }
}
