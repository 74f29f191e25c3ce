//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. Services
//! collect them into a `CampGraph`, and controllers render the graph into DTOs through a
//! `Projection`. Parameter types are validated on construction, so the service layer only
//! ever sees writes that satisfy the field rules.

pub mod activity;
pub mod camper;
pub mod graph;
pub mod projection;
pub mod serialize;
pub mod signup;
pub mod validation;
