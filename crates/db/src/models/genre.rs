//! Genre entity model and DTOs.

use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genre` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a genre.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateGenre {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

/// DTO for replacing a genre. Same shape as [`CreateGenre`].
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateGenre {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}
