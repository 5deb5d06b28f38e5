//! Store capability consumed by the relationship procedures.
//!
//! The database crate implements these traits over PostgreSQL; tests
//! implement them in memory. Every failure carries a [`StoreErrorKind`]
//! assigned by the adapter, so callers never inspect vendor error codes.

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Classification of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorKind {
    /// A uniqueness constraint rejected the write.
    DuplicateKey,
    /// A foreign-key constraint rejected the write or delete.
    ReferentialViolation,
    /// The addressed row does not exist.
    NotFound,
    /// Connectivity, pool, protocol or any unclassified failure.
    Transport,
}

impl StoreErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateKey => "duplicate_key",
            Self::ReferentialViolation => "referential_violation",
            Self::NotFound => "not_found",
            Self::Transport => "transport",
        }
    }
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed store operation.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Store error ({kind}): {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
    /// Name of the violated constraint, when the store reported one.
    pub constraint: Option<String>,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            constraint: None,
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Transport, message)
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// Number of cast appearances an actor has in movies of one genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreFrequency {
    pub genre: String,
    pub frequency: i64,
}

impl GenreFrequency {
    pub fn new(genre: impl Into<String>, frequency: i64) -> Self {
        Self {
            genre: genre.into(),
            frequency,
        }
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Read/write access to the movie–actor cast relation.
pub trait CastStore: Send + Sync {
    /// Whether a cast relation exists for the `(movie_id, actor_id)` pair.
    fn cast_relation_exists(
        &self,
        movie_id: DbId,
        actor_id: DbId,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Insert a cast relation with no character name.
    fn insert_cast_relation(
        &self,
        movie_id: DbId,
        actor_id: DbId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Grouped genre counts across actor → cast → movie → genre.
pub trait GenreFrequencySource: Send + Sync {
    /// Appearance counts per genre name for one actor. Order is unspecified.
    fn genre_frequencies(
        &self,
        actor_id: DbId,
    ) -> impl Future<Output = Result<Vec<GenreFrequency>, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_includes_kind_and_message() {
        let err = StoreError::new(StoreErrorKind::DuplicateKey, "pk_movie_actor");
        assert_eq!(
            err.to_string(),
            "Store error (duplicate_key): pk_movie_actor"
        );
    }

    #[test]
    fn constraint_is_optional() {
        let plain = StoreError::transport("timeout");
        assert!(plain.constraint.is_none());

        let tagged = StoreError::new(StoreErrorKind::ReferentialViolation, "fk")
            .with_constraint("fk_movie_actor_movie");
        assert_eq!(tagged.constraint.as_deref(), Some("fk_movie_actor_movie"));
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_value(StoreErrorKind::ReferentialViolation).unwrap();
        assert_eq!(json, "referential_violation");
    }
}
