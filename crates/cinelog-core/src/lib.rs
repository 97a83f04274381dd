//! Cinelog Core — shared domain types.
//!
//! This crate defines the entities, error taxonomy, and repository traits
//! that the catalog and review contexts depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod movie;
pub mod repository;
pub mod review;
