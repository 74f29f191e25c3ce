//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of logic that operates on
//! already-loaded rows, such as building and serializing an entity graph. Unlike
//! factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let camper = fixture::camper::entity();
//! let signup = fixture::signup::entity_builder()
//!     .camper_id(camper.id)
//!     .time(15)
//!     .build();
//! ```

pub mod activity;
pub mod camper;
pub mod signup;
