//! Integration tests for review submission.

mod common;

use axum::http::StatusCode;
use cinelog_test_support::movie_fixture;

#[tokio::test]
async fn test_create_review_round_trip() {
    let app = common::build_test_app(vec![movie_fixture("tt0111161", "The Shawshank Redemption")]);

    // POST /api/reviews/{imdbId}/reviews
    let (status, json) = common::post_json(
        app.clone(),
        "/api/reviews/tt0111161/reviews",
        &serde_json::json!({"reviewBody": "Great film", "imdbId": "tt0111161"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["body"], "Great film");
    assert_eq!(json["imdbId"], "tt0111161");
    let review_id = json["id"].as_str().unwrap().to_owned();

    // GET /api/movies/{imdbId} — the review is embedded in the movie detail.
    let (status, json) = common::get_json(app, "/api/movies/tt0111161").await;

    assert_eq!(status, StatusCode::OK);
    let reviews = json["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["id"], review_id);
    assert_eq!(reviews[0]["body"], "Great film");
}

#[tokio::test]
async fn test_create_review_allows_duplicate_submissions() {
    // No uniqueness rule: the same text may be submitted twice.
    let app = common::build_test_app(vec![movie_fixture("tt0111161", "The Shawshank Redemption")]);

    for _ in 0..2 {
        let (status, _) = common::post_json(
            app.clone(),
            "/api/reviews/tt0111161/reviews",
            &serde_json::json!({"reviewBody": "Great film", "imdbId": "tt0111161"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, json) = common::get_json(app, "/api/movies/tt0111161").await;
    assert_eq!(json["reviews"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_review_with_empty_body_returns_400() {
    let app = common::build_test_app(vec![movie_fixture("tt0111161", "The Shawshank Redemption")]);

    let (status, json) = common::post_json(
        app,
        "/api/reviews/tt0111161/reviews",
        &serde_json::json!({"reviewBody": "", "imdbId": "tt0111161"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_create_review_for_unknown_movie_returns_404() {
    let app = common::build_test_app(vec![movie_fixture("tt0111161", "The Shawshank Redemption")]);

    let (status, json) = common::post_json(
        app.clone(),
        "/api/reviews/tt9999999/reviews",
        &serde_json::json!({"reviewBody": "Great film", "imdbId": "tt9999999"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "movie_not_found");

    // No orphaned review: the known movie still has none.
    let (_, json) = common::get_json(app, "/api/movies/tt0111161").await;
    assert!(json["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_review_body_identifier_takes_precedence_over_path() {
    // Path says one movie, body says another; the body value wins, matching
    // the behavior the original client depends on.
    let app = common::build_test_app(vec![movie_fixture("tt0111161", "The Shawshank Redemption")]);

    let (status, json) = common::post_json(
        app,
        "/api/reviews/tt9999999/reviews",
        &serde_json::json!({"reviewBody": "Great film", "imdbId": "tt0111161"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["imdbId"], "tt0111161");
}
