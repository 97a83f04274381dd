//! Routes for the review context.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use cinelog_core::error::DomainError;
use cinelog_core::review::Review;
use cinelog_reviews::application::command_handlers;
use cinelog_reviews::domain::commands::SubmitReview;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /{imdbId}/reviews.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Review text.
    pub review_body: Option<String>,
    /// External identifier of the movie being reviewed. Historically the
    /// client sent this in the body as well as the path; when both are
    /// present the body value wins.
    pub imdb_id: Option<String>,
}

/// POST /{imdbId}/reviews
#[instrument(skip(state, request))]
async fn create_review(
    State(state): State<AppState>,
    Path(path_imdb_id): Path<String>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let body = request
        .review_body
        .ok_or_else(|| DomainError::Validation("reviewBody is required".to_owned()))?;
    let imdb_id = request.imdb_id.unwrap_or(path_imdb_id);

    let command = SubmitReview {
        correlation_id: Uuid::new_v4(),
        imdb_id,
        body,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_review command");

    let review = command_handlers::handle_submit_review(
        &command,
        state.clock.as_ref(),
        &*state.movie_repository,
        &*state.review_repository,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Returns the router for the review context.
pub fn router() -> Router<AppState> {
    Router::new().route("/{imdb_id}/reviews", post(create_review))
}
