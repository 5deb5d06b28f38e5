pub mod actor;
pub mod genre;
pub mod movie;

use cinema_core::store::StoreErrorKind;
use cinema_db::error::classify;

use crate::error::AppError;

/// Map a foreign-key violation to a `400` naming the relation involved.
///
/// Other database errors pass through unchanged.
pub(crate) fn on_reference_violation(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| match classify(&err) {
        StoreErrorKind::ReferentialViolation => AppError::BadRequest(message.to_string()),
        _ => AppError::Database(err),
    }
}
