//! Request extractors whose rejections render as [`AppError`] JSON bodies.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use cinema_core::types::DbId;

use crate::error::AppError;

/// JSON body extractor; malformed or mistyped payloads become `400 BAD_REQUEST`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor with the same rejection handling as [`AppJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// The `{id}` segment of a resource path, required to be a positive integer.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state).await?;
        Ok(IdPath(positive(id)?))
    }
}

/// A parent id followed by a child id, e.g. `/actors/{id}/characters/{movie_id}`.
#[derive(Debug, Clone, Copy)]
pub struct IdPairPath(pub DbId, pub DbId);

impl<S> FromRequestParts<S> for IdPairPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((parent, child)) = Path::<(DbId, DbId)>::from_request_parts(parts, state).await?;
        Ok(IdPairPath(positive(parent)?, positive(child)?))
    }
}

fn positive(id: DbId) -> Result<DbId, AppError> {
    if id < 1 {
        return Err(AppError::BadRequest(format!(
            "Invalid id: {id} (must be a positive integer)"
        )));
    }
    Ok(id)
}
