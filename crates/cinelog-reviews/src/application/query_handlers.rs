//! Query handlers for the review context.

use cinelog_core::error::DomainError;
use cinelog_core::repository::ReviewRepository;
use cinelog_core::review::Review;

/// All reviews referencing the given movie external identifier.
///
/// An unknown identifier simply yields an empty list; the catalog decides
/// whether the movie itself exists.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository read fails.
pub async fn reviews_for_movie(
    imdb_id: &str,
    reviews: &dyn ReviewRepository,
) -> Result<Vec<Review>, DomainError> {
    reviews.find_by_imdb_id(imdb_id).await
}
