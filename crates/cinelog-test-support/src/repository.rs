//! Test repositories — in-memory and always-failing implementations of the
//! core repository traits.

use std::sync::Mutex;

use async_trait::async_trait;
use cinelog_core::error::DomainError;
use cinelog_core::movie::Movie;
use cinelog_core::repository::{MovieRepository, ReviewRepository};
use cinelog_core::review::Review;
use uuid::Uuid;

/// Builds a movie with the given external id and title, other fields filled
/// with plausible defaults.
#[must_use]
pub fn movie_fixture(imdb_id: &str, title: &str) -> Movie {
    Movie {
        id: Uuid::new_v4(),
        imdb_id: imdb_id.to_owned(),
        title: title.to_owned(),
        release_date: Some("1994-09-23".to_owned()),
        trailer_link: Some("https://www.youtube.com/watch?v=NmzuHjWmXOc".to_owned()),
        poster: Some("https://image.example/poster.jpg".to_owned()),
        genres: vec!["Drama".to_owned()],
        backdrops: vec![],
    }
}

/// An in-memory movie repository seeded with a fixed set of movies.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    movies: Mutex<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    /// Create a repository containing the given movies.
    #[must_use]
    pub fn seeded(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        Ok(self.movies.lock().unwrap().clone())
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, DomainError> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.imdb_id == imdb_id)
            .cloned())
    }
}

/// An in-memory review repository that records inserts.
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: Mutex<Vec<Review>>,
}

impl InMemoryReviewRepository {
    /// Returns a snapshot of every review inserted so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn inserted(&self) -> Vec<Review> {
        self.reviews.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn insert(&self, review: &Review) -> Result<(), DomainError> {
        self.reviews.lock().unwrap().push(review.clone());
        Ok(())
    }

    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, DomainError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == review_id)
            .cloned())
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Vec<Review>, DomainError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.imdb_id == imdb_id)
            .cloned()
            .collect())
    }
}

/// A movie repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingMovieRepository;

#[async_trait]
impl MovieRepository for FailingMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_by_imdb_id(&self, _imdb_id: &str) -> Result<Option<Movie>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// A review repository that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingReviewRepository;

#[async_trait]
impl ReviewRepository for FailingReviewRepository {
    async fn insert(&self, _review: &Review) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_by_id(&self, _review_id: Uuid) -> Result<Option<Review>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_by_imdb_id(&self, _imdb_id: &str) -> Result<Vec<Review>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
