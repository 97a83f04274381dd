//! Cinelog Store — `PostgreSQL` implementations of the repository traits.
//!
//! Queries use the sqlx runtime API so the crate compiles without a live
//! database. Schema changes live in `migrations/` at the workspace root.

pub mod pg_movie_repository;
pub mod pg_review_repository;
pub mod schema;

use cinelog_core::error::DomainError;

/// Maps a sqlx error into the domain taxonomy. All store failures surface as
/// infrastructure errors; nothing here is retried.
pub(crate) fn infra(err: &sqlx::Error) -> DomainError {
    DomainError::Infrastructure(format!("database error: {err}"))
}
