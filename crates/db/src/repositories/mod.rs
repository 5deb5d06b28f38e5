//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod cast_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use cast_repo::CastRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;

/// Default page size for list queries.
pub const DEFAULT_LIMIT: i64 = 100;

/// Maximum page size for list queries.
pub const MAX_LIMIT: i64 = 500;

/// Clamp a requested page size into `1..=MAX_LIMIT`, defaulting to [`DEFAULT_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
