//! Handlers for the `/actors` resource, its filmography, and genre affinity.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::genre_affinity::GenreAffinityAggregator;
use cinema_core::store::{GenreFrequency, StoreErrorKind};
use cinema_core::types::DbId;
use cinema_core::validation::validate_payload;
use cinema_db::error::{classify, constraint_name};
use cinema_db::models::actor::{Actor, CreateActor, UpdateActor};
use cinema_db::models::cast::{ActorCharacter, CreateCharacter};
use cinema_db::models::movie::Movie;
use cinema_db::repositories::cast_repo::FK_CAST_ACTOR;
use cinema_db::repositories::{ActorRepo, CastRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery, IdPairPath, IdPath};
use crate::query::PaginationParams;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// Response payload for the favourite-genre endpoint.
#[derive(Debug, Serialize)]
pub struct FavouriteGenre {
    pub actor_id: DbId,
    /// `None` when the actor has no cast appearances.
    pub genre: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Actor", id })
}

/// Return 404 unless the actor exists.
async fn ensure_actor_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if ActorRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/actors
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Actor>>>> {
    let actors = ActorRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: actors }))
}

/// POST /api/v1/actors
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateActor>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_payload(&input)?;
    let actor = ActorRepo::create(&state.pool, &input).await?;
    tracing::info!(actor_id = actor.id, "Actor created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(actor.id, format!("/api/v1/actors/{}", actor.id))),
    ))
}

/// GET /api/v1/actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Actor>>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: actor }))
}

/// PUT /api/v1/actors/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<UpdateActor>,
) -> AppResult<StatusCode> {
    validate_payload(&input)?;
    if !ActorRepo::update(&state.pool, id, &input).await? {
        return Err(not_found(id));
    }
    tracing::info!(actor_id = id, "Actor updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/actors/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(actor_id = id, "Actor deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/actors/{id}/movies
pub async fn list_movies(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    ensure_actor_exists(&state, id).await?;
    let movies = ActorRepo::list_movies(&state.pool, id).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/actors/{id}/characters
pub async fn list_characters(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Vec<ActorCharacter>>>> {
    ensure_actor_exists(&state, id).await?;
    let characters = CastRepo::list_characters(&state.pool, id).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// POST /api/v1/actors/{id}/characters
///
/// Casts the actor in a movie under the given character name. The new
/// relation is addressed by the movie id.
pub async fn add_character(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<CreateCharacter>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_payload(&input)?;
    ensure_actor_exists(&state, id).await?;

    let relation = CastRepo::insert(
        &state.pool,
        input.movie_id,
        id,
        Some(input.character_name.as_str()),
    )
    .await
    .map_err(|err| match classify(&err) {
        StoreErrorKind::DuplicateKey => AppError::Core(CoreError::Conflict(format!(
            "Actor {id} is already cast in movie {}",
            input.movie_id
        ))),
        // The actor may have been deleted after the existence check.
        StoreErrorKind::ReferentialViolation if constraint_name(&err) == Some(FK_CAST_ACTOR) => {
            not_found(id)
        }
        StoreErrorKind::ReferentialViolation => {
            AppError::BadRequest("Related movie does not exist".to_string())
        }
        _ => AppError::Database(err),
    })?;

    tracing::info!(
        actor_id = id,
        movie_id = relation.movie_id,
        character = %relation.character_name,
        "Character added"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            relation.movie_id,
            format!("/api/v1/actors/{id}/characters/{}", relation.movie_id),
        )),
    ))
}

/// GET /api/v1/actors/{id}/characters/{movie_id}
pub async fn get_character(
    State(state): State<AppState>,
    IdPairPath(id, movie_id): IdPairPath,
) -> AppResult<Json<DataResponse<ActorCharacter>>> {
    ensure_actor_exists(&state, id).await?;
    let character = CastRepo::find_character(&state.pool, movie_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: movie_id,
        }))?;
    Ok(Json(DataResponse { data: character }))
}

/// GET /api/v1/actors/{id}/genres
pub async fn genre_frequencies(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Vec<GenreFrequency>>>> {
    ensure_actor_exists(&state, id).await?;
    let store = state.store();
    let rows = GenreAffinityAggregator::new(&store).frequencies(id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/actors/{id}/genre/favourite
pub async fn favourite_genre(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<FavouriteGenre>>> {
    ensure_actor_exists(&state, id).await?;
    let store = state.store();
    let genre = GenreAffinityAggregator::new(&store).favorite_genre(id).await?;
    Ok(Json(DataResponse {
        data: FavouriteGenre {
            actor_id: id,
            genre,
        },
    }))
}
