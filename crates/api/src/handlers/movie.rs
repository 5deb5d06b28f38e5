//! Handlers for the `/movies` resource and its cast.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::cast::{LinkReport, LinkStatus, RelationshipLinker};
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_core::validation::{validate_actor_ids, validate_payload};
use cinema_db::models::cast::{CastMember, LinkActorsRequest};
use cinema_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinema_db::repositories::cast_repo::FK_CAST_MOVIE;
use cinema_db::repositories::{CastRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery, IdPath};
use crate::handlers::on_reference_violation;
use crate::query::PaginationParams;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

const MISSING_GENRE: &str = "Related genre does not exist";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// Return 404 unless the movie exists.
async fn ensure_movie_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if MovieRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = MovieRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_payload(&input)?;
    let movie = MovieRepo::create(&state.pool, &input)
        .await
        .map_err(on_reference_violation(MISSING_GENRE))?;
    tracing::info!(movie_id = movie.id, genre_id = movie.genre_id, "Movie created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(movie.id, format!("/api/v1/movies/{}", movie.id))),
    ))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: movie }))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<StatusCode> {
    validate_payload(&input)?;
    let updated = MovieRepo::update(&state.pool, id, &input)
        .await
        .map_err(on_reference_violation(MISSING_GENRE))?;
    if !updated {
        return Err(not_found(id));
    }
    tracing::info!(movie_id = id, "Movie updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/movies/{id}
///
/// Cast relations of the movie are removed by cascade.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(movie_id = id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/movies/{id}/actors
pub async fn list_actors(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Vec<CastMember>>>> {
    ensure_movie_exists(&state, id).await?;
    let cast = CastRepo::list_for_movie(&state.pool, id).await?;
    Ok(Json(DataResponse { data: cast }))
}

/// POST /api/v1/movies/{id}/actors
///
/// Idempotently adds the given actors to the movie's cast. Actors already
/// in the cast are reported `already_linked`; unknown actors are reported
/// `failed` without affecting the others. If the movie disappears while
/// linking, the whole call answers 404.
pub async fn link_actors(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<LinkActorsRequest>,
) -> AppResult<Json<DataResponse<LinkReport>>> {
    validate_actor_ids(&input.actor_ids)?;
    ensure_movie_exists(&state, id).await?;

    let store = state.store();
    let report = RelationshipLinker::new(&store)
        .link(id, &input.actor_ids)
        .await?;

    // The movie was deleted after the existence check.
    if report.failed_on(FK_CAST_MOVIE) {
        return Err(not_found(id));
    }

    tracing::info!(
        movie_id = id,
        linked = report.actors_with(LinkStatus::Linked).len(),
        already_linked = report.actors_with(LinkStatus::AlreadyLinked).len(),
        failed = report.actors_with(LinkStatus::Failed).len(),
        "Cast linked"
    );
    Ok(Json(DataResponse { data: report }))
}
