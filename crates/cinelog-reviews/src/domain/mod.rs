//! Domain layer for the review context.

pub mod commands;
