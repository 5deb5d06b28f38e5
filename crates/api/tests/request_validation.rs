//! Request rejection tests that never reach the database.
//!
//! The router is backed by a lazily-connected pool, so every request here
//! must be answered by an extractor, a payload validator, or the
//! middleware stack before any query runs.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_offline_app, get, post_json, post_raw, put_json, send};
use serde_json::json;

fn movie_payload() -> serde_json::Value {
    json!({
        "name": "Alien",
        "released_at": "1979-05-25",
        "runtime": 117,
        "genre_id": 5
    })
}

// ---------------------------------------------------------------------------
// Path ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let response = get(build_offline_app(), "/api/v1/movies/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn zero_id_returns_400() {
    let response = get(build_offline_app(), "/api/v1/actors/0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("positive integer"));
}

#[tokio::test]
async fn negative_id_on_nested_route_returns_400() {
    let response = get(build_offline_app(), "/api/v1/actors/-4/genre/favourite").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_movie_id_on_link_returns_400() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/movies/alien/actors",
        json!({"actor_ids": [1]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_movie_id_on_character_route_returns_400() {
    let response = get(build_offline_app(), "/api/v1/actors/3/characters/seven").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn zero_movie_id_on_character_route_returns_400() {
    let response = get(build_offline_app(), "/api/v1/actors/3/characters/0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("positive integer"));
}

// ---------------------------------------------------------------------------
// Payload shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400() {
    let response = post_raw(build_offline_app(), "/api/v1/genres", "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_field_returns_400() {
    let mut payload = movie_payload();
    payload.as_object_mut().unwrap().remove("genre_id");

    let response = post_json(build_offline_app(), "/api/v1/movies", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("genre_id"));
}

#[tokio::test]
async fn unknown_field_returns_400() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/genres",
        json!({"name": "Western", "popularity": 3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_date_returns_400() {
    let mut payload = movie_payload();
    payload["released_at"] = json!("25/05/1979");

    let response = post_json(build_offline_app(), "/api/v1/movies", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_returns_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/genres")
        .body(Body::from(r#"{"name": "Western"}"#))
        .unwrap();

    let response = send(build_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_pagination_returns_400() {
    let response = get(build_offline_app(), "/api/v1/genres?limit=lots").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_genre_name_returns_validation_error() {
    let response = post_json(build_offline_app(), "/api/v1/genres", json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn overlong_genre_name_on_update_returns_validation_error() {
    let response = put_json(
        build_offline_app(),
        "/api/v1/genres/1",
        json!({"name": "x".repeat(51)}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn zero_runtime_returns_validation_error() {
    let mut payload = movie_payload();
    payload["runtime"] = json!(0);

    let response = post_json(build_offline_app(), "/api/v1/movies", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("runtime"));
}

#[tokio::test]
async fn non_positive_actor_id_in_link_returns_validation_error() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/movies/1/actors",
        json!({"actor_ids": [3, 0]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn oversized_link_batch_returns_validation_error() {
    let ids: Vec<i64> = (1..=101).collect();
    let response = post_json(
        build_offline_app(),
        "/api/v1/movies/1/actors",
        json!({"actor_ids": ids}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn empty_character_name_returns_validation_error() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/actors/1/characters",
        json!({"movie_id": 1, "character_name": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_offline_app(), "/api/v1/studios").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejected_request_still_carries_request_id() {
    let response = get(build_offline_app(), "/api/v1/genres/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_returns_allowed_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/genres")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(build_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:5173"
    );
}
