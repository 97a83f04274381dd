//! Shared test fakes and utilities for the Cinelog backend.

mod clock;
mod repository;

pub use clock::FixedClock;
pub use repository::{
    FailingMovieRepository, FailingReviewRepository, InMemoryMovieRepository,
    InMemoryReviewRepository, movie_fixture,
};
