//! Repository for the `movie_actor` junction table.
//!
//! Single-statement primitives only; the idempotent multi-actor linking
//! procedure lives in `cinema_core::cast` and reaches these through
//! [`crate::store::PgStore`].

use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::cast::{ActorCharacter, CastMember, CastRelation};

/// Foreign key from `movie_actor.movie_id` to `movie`.
pub const FK_CAST_MOVIE: &str = "fk_movie_actor_movie";

/// Foreign key from `movie_actor.actor_id` to `actor`.
pub const FK_CAST_ACTOR: &str = "fk_movie_actor_actor";

/// Provides access to cast relations.
pub struct CastRepo;

impl CastRepo {
    /// Whether `(movie_id, actor_id)` is already a cast relation.
    pub async fn exists(pool: &PgPool, movie_id: DbId, actor_id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM movie_actor WHERE movie_id = $1 AND actor_id = $2)",
        )
        .bind(movie_id)
        .bind(actor_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Insert a cast relation, returning the created row.
    ///
    /// Fails with a unique violation if the pair already exists and with a
    /// foreign-key violation if either side does not exist.
    pub async fn insert(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
        character_name: Option<&str>,
    ) -> Result<CastRelation, sqlx::Error> {
        sqlx::query_as::<_, CastRelation>(
            "INSERT INTO movie_actor (movie_id, actor_id, character_name) \
             VALUES ($1, $2, COALESCE($3, '')) \
             RETURNING movie_id, actor_id, character_name",
        )
        .bind(movie_id)
        .bind(actor_id)
        .bind(character_name)
        .fetch_one(pool)
        .await
    }

    /// The cast of a movie, ordered by actor name.
    pub async fn list_for_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<CastMember>, sqlx::Error> {
        sqlx::query_as::<_, CastMember>(
            "SELECT a.id AS actor_id, a.name, a.born_at, ma.character_name \
             FROM movie_actor ma \
             JOIN actor a ON a.id = ma.actor_id \
             WHERE ma.movie_id = $1 \
             ORDER BY a.name, a.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Characters an actor has played, ordered by movie release date.
    pub async fn list_characters(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<ActorCharacter>, sqlx::Error> {
        sqlx::query_as::<_, ActorCharacter>(
            "SELECT m.id AS movie_id, m.name AS movie_name, ma.character_name \
             FROM movie_actor ma \
             JOIN movie m ON m.id = ma.movie_id \
             WHERE ma.actor_id = $1 \
             ORDER BY m.released_at, m.id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }

    /// The character an actor played in one movie, if they are in its cast.
    pub async fn find_character(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<Option<ActorCharacter>, sqlx::Error> {
        sqlx::query_as::<_, ActorCharacter>(
            "SELECT m.id AS movie_id, m.name AS movie_name, ma.character_name \
             FROM movie_actor ma \
             JOIN movie m ON m.id = ma.movie_id \
             WHERE ma.movie_id = $1 AND ma.actor_id = $2",
        )
        .bind(movie_id)
        .bind(actor_id)
        .fetch_optional(pool)
        .await
    }

    /// Appearance counts per genre name for one actor.
    pub async fn genre_frequencies(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT g.name, COUNT(*) AS frequency \
             FROM movie_actor ma \
             JOIN movie m ON m.id = ma.movie_id \
             JOIN genre g ON g.id = m.genre_id \
             WHERE ma.actor_id = $1 \
             GROUP BY g.name \
             ORDER BY frequency DESC, g.name",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}
