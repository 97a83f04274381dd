//! Repository abstractions over the persistence layer.
//!
//! The store is treated as an opaque external collaborator with its own
//! concurrency guarantees; these traits are the only seam the domain
//! contexts see, which is what lets tests substitute in-memory fakes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::movie::Movie;
use crate::review::Review;

/// Read-only access to movie records.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Load every movie. Returns a fresh snapshot on each call.
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError>;

    /// Look up a single movie by its external identifier. Absence is
    /// `Ok(None)`, not an error.
    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, DomainError>;
}

/// Persistence for review records.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a new review row.
    async fn insert(&self, review: &Review) -> Result<(), DomainError>;

    /// Look up a review by its internal identifier.
    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, DomainError>;

    /// All reviews referencing the given movie external identifier.
    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Vec<Review>, DomainError>;
}
