//! Cinelog API — HTTP layer, exposed as a library for integration tests.

pub mod error;
pub mod routes;
pub mod state;
