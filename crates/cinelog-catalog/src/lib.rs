//! Cinelog — movie catalog query context.
//!
//! Read-only lookups over the movie repository. This context performs no
//! writes; movie records are maintained by an out-of-scope ingestion
//! process.

pub mod application;
