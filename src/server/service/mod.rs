//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They are responsible for:
//!
//! - **Transaction Management**: every write runs inside a `DatabaseTransaction` that is
//!   committed on success and rolled back when dropped on any other path
//! - **Orchestration**: loading the campers, activities and signups a response needs into
//!   a `CampGraph`
//! - **Reference Checks**: rejecting signups whose camper or activity does not exist

pub mod activity;
pub mod camper;
pub mod signup;

#[cfg(test)]
mod test;
