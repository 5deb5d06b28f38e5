//! Movie entity model and DTOs.

use cinema_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movie` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub synopsis: Option<String>,
    pub released_at: Date,
    /// Running time in minutes.
    pub runtime: i32,
    pub genre_id: DbId,
}

/// DTO for creating a movie.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub synopsis: Option<String>,
    pub released_at: Date,
    #[validate(range(min = 1))]
    pub runtime: i32,
    #[validate(range(min = 1))]
    pub genre_id: DbId,
}

/// DTO for replacing a movie. All fields except `synopsis` are required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub synopsis: Option<String>,
    pub released_at: Date,
    #[validate(range(min = 1))]
    pub runtime: i32,
    #[validate(range(min = 1))]
    pub genre_id: DbId,
}
