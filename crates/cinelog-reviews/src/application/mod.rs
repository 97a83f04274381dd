//! Application layer for the review context.

pub mod command_handlers;
pub mod query_handlers;
