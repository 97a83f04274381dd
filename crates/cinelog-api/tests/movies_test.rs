//! Integration tests for the movie catalog endpoints.

mod common;

use axum::http::StatusCode;
use cinelog_test_support::movie_fixture;

#[tokio::test]
async fn test_list_movies_returns_every_seeded_movie() {
    let app = common::build_test_app(vec![
        movie_fixture("tt0111161", "The Shawshank Redemption"),
        movie_fixture("tt0068646", "The Godfather"),
        movie_fixture("tt0468569", "The Dark Knight"),
    ]);

    let (status, json) = common::get_json(app, "/api/movies").await;

    assert_eq!(status, StatusCode::OK);
    let movies = json.as_array().unwrap();
    assert_eq!(movies.len(), 3);
    assert!(movies.iter().all(|m| m["imdbId"].is_string()));
}

#[tokio::test]
async fn test_list_movies_returns_empty_array_for_empty_catalog() {
    let app = common::build_test_app(vec![]);

    let (status, json) = common::get_json(app, "/api/movies").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_movie_returns_catalog_fields_in_camel_case() {
    let app = common::build_test_app(vec![movie_fixture("tt0111161", "The Shawshank Redemption")]);

    let (status, json) = common::get_json(app, "/api/movies/tt0111161").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["imdbId"], "tt0111161");
    assert_eq!(json["title"], "The Shawshank Redemption");
    assert!(json["releaseDate"].is_string());
    assert!(json["trailerLink"].is_string());
    assert!(json["poster"].is_string());
    assert!(json["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_unknown_movie_returns_404() {
    let app = common::build_test_app(vec![movie_fixture("tt0111161", "The Shawshank Redemption")]);

    let (status, json) = common::get_json(app, "/api/movies/tt9999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "movie_not_found");
    assert!(json["message"].as_str().unwrap().contains("tt9999999"));
}
