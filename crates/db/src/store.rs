//! PostgreSQL implementation of the core store traits.

use cinema_core::store::{CastStore, GenreFrequency, GenreFrequencySource, StoreError};
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::error::store_error;
use crate::repositories::CastRepo;

/// Adapter exposing the pool to `cinema_core` procedures.
///
/// Cheap to construct per request: `PgPool` is reference-counted.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CastStore for PgStore {
    async fn cast_relation_exists(&self, movie_id: DbId, actor_id: DbId) -> Result<bool, StoreError> {
        CastRepo::exists(&self.pool, movie_id, actor_id)
            .await
            .map_err(store_error)
    }

    async fn insert_cast_relation(&self, movie_id: DbId, actor_id: DbId) -> Result<(), StoreError> {
        CastRepo::insert(&self.pool, movie_id, actor_id, None)
            .await
            .map(|_| ())
            .map_err(store_error)
    }
}

impl GenreFrequencySource for PgStore {
    async fn genre_frequencies(&self, actor_id: DbId) -> Result<Vec<GenreFrequency>, StoreError> {
        let rows = CastRepo::genre_frequencies(&self.pool, actor_id)
            .await
            .map_err(store_error)?;
        Ok(rows
            .into_iter()
            .map(|(genre, frequency)| GenreFrequency { genre, frequency })
            .collect())
    }
}
