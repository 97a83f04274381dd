//! Cinelog — review submission context.
//!
//! Owns the one piece of business logic in the system: constructing a
//! `Review` from raw input, checking the referenced movie exists, and
//! persisting it.

pub mod application;
pub mod domain;
