//! Handlers for the `/genres` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_core::validation::validate_payload;
use cinema_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use cinema_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery, IdPath};
use crate::handlers::on_reference_violation;
use crate::query::PaginationParams;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Genre", id })
}

/// GET /api/v1/genres
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Genre>>>> {
    let genres = GenreRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// POST /api/v1/genres
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateGenre>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_payload(&input)?;
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(genre.id, format!("/api/v1/genres/{}", genre.id))),
    ))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Genre>>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: genre }))
}

/// PUT /api/v1/genres/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<UpdateGenre>,
) -> AppResult<StatusCode> {
    validate_payload(&input)?;
    if !GenreRepo::update(&state.pool, id, &input).await? {
        return Err(not_found(id));
    }
    tracing::info!(genre_id = id, name = %input.name, "Genre updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/genres/{id}
///
/// Rejected with `400` while any movie still references the genre.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id)
        .await
        .map_err(on_reference_violation("Genre has related movies"))?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(genre_id = id, "Genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
