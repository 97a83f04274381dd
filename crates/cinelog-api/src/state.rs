//! Shared application state.

use std::sync::Arc;

use cinelog_core::clock::Clock;
use cinelog_core::repository::{MovieRepository, ReviewRepository};

/// Application state shared across all request handlers.
///
/// Repositories are held behind trait objects so tests can substitute
/// in-memory fakes without touching the router.
#[derive(Clone)]
pub struct AppState {
    /// Read-only access to the movie catalog.
    pub movie_repository: Arc<dyn MovieRepository>,
    /// Persistence for reviews.
    pub review_repository: Arc<dyn ReviewRepository>,
    /// Time source for review timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        review_repository: Arc<dyn ReviewRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            movie_repository,
            review_repository,
            clock,
        }
    }
}
