//! Application layer for the catalog context.

pub mod query_handlers;
