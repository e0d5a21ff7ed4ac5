//! Deck entity model and DTOs.

use quizdeck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `decks` table.
///
/// Identity is the `id`; `owner_id` is set at creation and has no
/// update path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deck {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    /// Opaque content owned by the deck; never interpreted here.
    pub payload: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new deck.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeck {
    pub owner_id: DbId,
    pub name: String,
    /// Defaults to the empty string if omitted.
    pub payload: Option<String>,
}

/// DTO for updating an existing deck. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDeck {
    pub name: Option<String>,
    pub payload: Option<String>,
}

/// Filter and pagination parameters for deck search queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckSearchParams {
    /// Case-insensitive substring match on the deck name.
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
