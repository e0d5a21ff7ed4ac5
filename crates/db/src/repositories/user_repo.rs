//! Repository for the `users` table.

use quizdeck_core::error::CoreError;
use quizdeck_core::types::DbId;
use sqlx::PgPool;

use crate::error::map_sqlx_error;
use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, created_at, updated_at";

/// Provides owner records for deck ownership.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with [`CoreError::Conflict`] on a duplicate username.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, CoreError> {
        let query = format!("INSERT INTO users (username) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)
    }
}
