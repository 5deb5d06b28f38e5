//! Cast relation (`movie_actor`) models and DTOs.

use cinema_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movie_actor` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastRelation {
    pub movie_id: DbId,
    pub actor_id: DbId,
    /// Empty when the actor was linked without naming the character.
    pub character_name: String,
}

/// An actor as listed in a movie's cast.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    pub actor_id: DbId,
    pub name: String,
    pub born_at: Date,
    pub character_name: String,
}

/// A character an actor played, with the movie it belongs to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorCharacter {
    pub movie_id: DbId,
    pub movie_name: String,
    pub character_name: String,
}

/// DTO for linking actors to a movie's cast.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkActorsRequest {
    pub actor_ids: Vec<DbId>,
}

/// DTO for recording the character an actor played in a movie.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCharacter {
    #[validate(range(min = 1))]
    pub movie_id: DbId,
    #[validate(length(min = 1, max = 200))]
    pub character_name: String,
}
