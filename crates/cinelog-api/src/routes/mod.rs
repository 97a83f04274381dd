//! Route modules organized by context.

pub mod health;
pub mod movies;
pub mod reviews;
