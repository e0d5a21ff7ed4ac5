//! Repository for the `decks` table.

use quizdeck_core::deck::validate_deck_name;
use quizdeck_core::error::CoreError;
use quizdeck_core::types::DbId;
use sqlx::PgPool;

use crate::error::map_sqlx_error;
use crate::models::deck::{CreateDeck, Deck, DeckSearchParams, UpdateDeck};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, payload, deleted_at, created_at, updated_at";

/// Default page size for search queries.
const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on the page size a caller may request.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for decks.
///
/// Per-owner name uniqueness among live rows is enforced atomically by
/// the partial unique index `uq_decks_owner_id_name`; there is no
/// check-then-insert sequence anywhere in this repository.
pub struct DeckRepo;

impl DeckRepo {
    /// Insert a new deck, returning the created row.
    ///
    /// If `payload` is `None`, defaults to the empty string. Fails with
    /// [`CoreError::Conflict`] if the owner already has a live deck
    /// with the same name.
    pub async fn create(pool: &PgPool, input: &CreateDeck) -> Result<Deck, CoreError> {
        validate_deck_name(&input.name)?;
        let query = format!(
            "INSERT INTO decks (owner_id, name, payload)
             VALUES ($1, $2, COALESCE($3, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(input.owner_id)
            .bind(&input.name)
            .bind(input.payload.as_deref())
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Fetch a deck by its internal ID. Excludes soft-deleted rows.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Deck, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM decks WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound { entity: "deck", id })
    }

    /// Fetch a deck by ID, including soft-deleted rows.
    ///
    /// For internal audit/restore paths only; default reads go through
    /// [`DeckRepo::get`].
    pub async fn get_include_deleted(pool: &PgPool, id: DbId) -> Result<Deck, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM decks WHERE id = $1");
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound { entity: "deck", id })
    }

    /// List all live decks owned by a user, ordered by ID ascending.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Deck>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM decks
             WHERE owner_id = $1 AND deleted_at IS NULL
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Search a user's live decks with an optional name filter and
    /// pagination, most recently updated first.
    pub async fn search_by_owner(
        pool: &PgPool,
        owner_id: DbId,
        params: &DeckSearchParams,
    ) -> Result<Vec<Deck>, CoreError> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        let query = if params.name.is_some() {
            format!(
                "SELECT {COLUMNS} FROM decks
                 WHERE owner_id = $1 AND deleted_at IS NULL AND name ILIKE $2
                 ORDER BY updated_at DESC, id DESC
                 LIMIT $3 OFFSET $4"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM decks
                 WHERE owner_id = $1 AND deleted_at IS NULL
                 ORDER BY updated_at DESC, id DESC
                 LIMIT $2 OFFSET $3"
            )
        };

        let mut q = sqlx::query_as::<_, Deck>(&query).bind(owner_id);
        if let Some(ref name) = params.name {
            q = q.bind(format!("%{name}%"));
        }
        q.bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Update a deck. Only non-`None` fields in `input` are applied.
    ///
    /// Fails with [`CoreError::NotFound`] if `id` does not resolve to a
    /// live deck, or [`CoreError::Conflict`] if the new name collides
    /// with another live deck of the same owner. The update is a single
    /// statement, so a failed attempt leaves the row untouched.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateDeck) -> Result<Deck, CoreError> {
        if let Some(ref name) = input.name {
            validate_deck_name(name)?;
        }
        let query = format!(
            "UPDATE decks SET
                name = COALESCE($2, name),
                payload = COALESCE($3, payload)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.payload.as_deref())
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound { entity: "deck", id })
    }

    /// Soft-delete a deck by ID.
    ///
    /// Idempotent: deleting an already-deleted deck is a no-op success.
    /// Fails with [`CoreError::NotFound`] only if the ID never existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query(
            "UPDATE decks SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Zero rows affected: either already deleted or never existed.
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM decks WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)?;
        if exists.0 {
            Ok(())
        } else {
            Err(CoreError::NotFound { entity: "deck", id })
        }
    }

    /// Restore a soft-deleted deck. Returns `true` if a row was restored.
    ///
    /// Fails with [`CoreError::Conflict`] if a live deck of the same
    /// owner has taken the name since deletion; the record then stays
    /// deleted.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query(
            "UPDATE decks SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(result.rows_affected() > 0)
    }
}
