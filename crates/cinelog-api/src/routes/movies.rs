//! Routes for the movie catalog context.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::instrument;

use cinelog_catalog::application::query_handlers;
use cinelog_core::error::DomainError;
use cinelog_core::movie::Movie;
use cinelog_core::review::Review;
use cinelog_reviews::application::query_handlers as review_queries;

use crate::error::ApiError;
use crate::state::AppState;

/// Movie detail response: the catalog record with its reviews embedded, the
/// shape the original client renders from.
#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    /// The movie record.
    #[serde(flatten)]
    pub movie: Movie,
    /// Reviews referencing this movie, oldest first.
    pub reviews: Vec<Review>,
}

/// GET /api/movies
#[instrument(skip(state))]
async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = query_handlers::list_movies(&*state.movie_repository).await?;
    Ok(Json(movies))
}

/// GET /api/movies/{imdbId}
#[instrument(skip(state))]
async fn get_movie(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> Result<Json<MovieDetailResponse>, ApiError> {
    let movie = query_handlers::movie_by_imdb_id(&imdb_id, &*state.movie_repository)
        .await?
        .ok_or_else(|| ApiError(DomainError::MovieNotFound(imdb_id.clone())))?;

    let reviews = review_queries::reviews_for_movie(&imdb_id, &*state.review_repository).await?;

    Ok(Json(MovieDetailResponse { movie, reviews }))
}

/// Returns the router for the movie catalog context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movies))
        .route("/{imdb_id}", get(get_movie))
}
