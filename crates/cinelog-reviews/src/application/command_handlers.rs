//! Command handlers for the review context.
//!
//! Application-level orchestration: validate input, check the referenced
//! movie exists, construct the entity, persist it.

use cinelog_core::clock::Clock;
use cinelog_core::error::DomainError;
use cinelog_core::repository::{MovieRepository, ReviewRepository};
use cinelog_core::review::Review;
use uuid::Uuid;

use crate::domain::commands::SubmitReview;

/// Handles the `SubmitReview` command: validates the body, verifies the
/// referenced movie exists, and persists a new review.
///
/// The returned review carries its store-assigned identifier so callers can
/// echo the full entity back to the client.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the review body is empty or
/// whitespace-only, `DomainError::MovieNotFound` if no movie matches the
/// command's `imdb_id`, and `DomainError::Infrastructure` if a repository
/// call fails.
pub async fn handle_submit_review(
    command: &SubmitReview,
    clock: &dyn Clock,
    movies: &dyn MovieRepository,
    reviews: &dyn ReviewRepository,
) -> Result<Review, DomainError> {
    if command.body.trim().is_empty() {
        return Err(DomainError::Validation(
            "review body must not be empty".to_owned(),
        ));
    }

    // Reject before inserting so an unknown movie never leaves an orphaned
    // review behind.
    if movies.find_by_imdb_id(&command.imdb_id).await?.is_none() {
        return Err(DomainError::MovieNotFound(command.imdb_id.clone()));
    }

    let review = Review {
        id: Uuid::new_v4(),
        imdb_id: command.imdb_id.clone(),
        body: command.body.clone(),
        created_at: clock.now(),
    };

    reviews.insert(&review).await?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        review_id = %review.id,
        imdb_id = %review.imdb_id,
        "review persisted"
    );

    Ok(review)
}
