//! Repository for the `actor` table.

use cinema_core::types::DbId;
use sqlx::PgPool;

use super::{clamp_limit, clamp_offset};
use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, bio, born_at";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actor (name, bio, born_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(input.born_at)
            .fetch_one(pool)
            .await
    }

    /// Find an actor by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actor WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an actor with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM actor WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List actors ordered by ID.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actor ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Actor>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Replace every column of an actor. Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateActor) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE actor SET name = $2, bio = $3, born_at = $4 WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(input.born_at)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an actor. Their cast relations are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Movies the actor appears in, ordered by release date.
    pub async fn list_movies(pool: &PgPool, actor_id: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.name, m.synopsis, m.released_at, m.runtime, m.genre_id \
             FROM movie_actor ma \
             JOIN movie m ON m.id = ma.movie_id \
             WHERE ma.actor_id = $1 \
             ORDER BY m.released_at, m.id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}
