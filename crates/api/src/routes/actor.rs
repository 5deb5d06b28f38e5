//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/movies                   -> list_movies
/// GET    /{id}/characters               -> list_characters
/// POST   /{id}/characters               -> add_character
/// GET    /{id}/characters/{movie_id}    -> get_character
/// GET    /{id}/genres                   -> genre_frequencies
/// GET    /{id}/genre/favourite          -> favourite_genre
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list).post(actor::create))
        .route(
            "/{id}",
            get(actor::get_by_id)
                .put(actor::update)
                .delete(actor::delete),
        )
        .route("/{id}/movies", get(actor::list_movies))
        .route(
            "/{id}/characters",
            get(actor::list_characters).post(actor::add_character),
        )
        .route("/{id}/characters/{movie_id}", get(actor::get_character))
        .route("/{id}/genres", get(actor::genre_frequencies))
        .route("/{id}/genre/favourite", get(actor::favourite_genre))
}
