pub mod actor;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /genres                                    list, create
/// /genres/{id}                               get, update, delete
///
/// /movies                                    list, create
/// /movies/{id}                               get, update, delete
/// /movies/{id}/actors                        cast listing, link actors
///
/// /actors                                    list, create
/// /actors/{id}                               get, update, delete
/// /actors/{id}/movies                        filmography
/// /actors/{id}/characters                    list, add character
/// /actors/{id}/characters/{movie_id}         get character
/// /actors/{id}/genres                        genre appearance counts
/// /actors/{id}/genre/favourite               favourite genre
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/genres", genre::router())
        .nest("/movies", movie::router())
        .nest("/actors", actor::router())
}
