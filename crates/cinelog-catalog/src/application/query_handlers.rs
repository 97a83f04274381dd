//! Query handlers for the movie catalog context.
//!
//! Thin delegations to the movie repository: the catalog has no business
//! rules of its own beyond the found-or-absent contract on single lookups.

use cinelog_core::error::DomainError;
use cinelog_core::movie::Movie;
use cinelog_core::repository::MovieRepository;

/// Returns every movie in the catalog as a fresh snapshot.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository read fails.
pub async fn list_movies(movies: &dyn MovieRepository) -> Result<Vec<Movie>, DomainError> {
    movies.find_all().await
}

/// Looks up a single movie by its external (IMDb) identifier.
///
/// Absence is part of the contract: an unknown identifier yields `Ok(None)`,
/// never an error. Callers decide how to surface it.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository read fails.
pub async fn movie_by_imdb_id(
    imdb_id: &str,
    movies: &dyn MovieRepository,
) -> Result<Option<Movie>, DomainError> {
    movies.find_by_imdb_id(imdb_id).await
}
