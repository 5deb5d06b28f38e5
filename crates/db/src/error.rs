//! Translation of `sqlx` failures into [`StoreErrorKind`].
//!
//! This is the only place that inspects PostgreSQL SQLSTATE codes.

use cinema_core::store::{StoreError, StoreErrorKind};

/// `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// `foreign_key_violation`
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Classify a `sqlx` error.
///
/// - `RowNotFound` maps to [`StoreErrorKind::NotFound`].
/// - SQLSTATE `23505` maps to [`StoreErrorKind::DuplicateKey`].
/// - SQLSTATE `23503` maps to [`StoreErrorKind::ReferentialViolation`].
/// - Everything else is [`StoreErrorKind::Transport`].
pub fn classify(err: &sqlx::Error) -> StoreErrorKind {
    match err {
        sqlx::Error::RowNotFound => StoreErrorKind::NotFound,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => StoreErrorKind::DuplicateKey,
            Some(FOREIGN_KEY_VIOLATION) => StoreErrorKind::ReferentialViolation,
            _ => StoreErrorKind::Transport,
        },
        _ => StoreErrorKind::Transport,
    }
}

/// Name of the violated constraint, when the database reported one.
pub fn constraint_name(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

/// Convert a `sqlx` error into a tagged [`StoreError`].
pub fn store_error(err: sqlx::Error) -> StoreError {
    let kind = classify(&err);
    tracing::debug!(%kind, error = %err, "Classified database error");
    match constraint_name(&err) {
        Some(constraint) => {
            StoreError::new(kind, format!("constraint {constraint} violated"))
                .with_constraint(constraint)
        }
        None => StoreError::new(kind, err.to_string()),
    }
}
