//! SeaORM entity definitions for the camp registry.
//!
//! `camper` and `activity` each own a collection of `signup` rows. A signup belongs to
//! exactly one camper and one activity, and its foreign keys cascade on delete so that
//! removing either owner removes the signup with it.

pub mod prelude;

pub mod activity;
pub mod camper;
pub mod signup;
