//! Factories that insert test rows with sensible defaults.
//!
//! Each factory exposes a builder for overriding individual columns and a `create_*`
//! shorthand for the common case. Unlike fixtures, factories write to the database.

pub mod activity;
pub mod camper;
pub mod helpers;
pub mod signup;
