//! Camp Registry Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the camp
//! registry. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert rows with sensible defaults, and fixtures that
//! build entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts campers, activities and signups
//! - **fixture**: In-memory entity models
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_camper_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let camper = factory::camper::create_camper(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
