//! Commands for the review context.

use uuid::Uuid;

/// Submit a new review for a movie.
#[derive(Debug, Clone)]
pub struct SubmitReview {
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
    /// External identifier of the movie being reviewed.
    pub imdb_id: String,
    /// Review text.
    pub body: String,
}
