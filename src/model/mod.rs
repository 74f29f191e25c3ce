//! Wire types exchanged with API clients.
//!
//! Request payloads are decoded into these DTOs before any validation happens, and
//! response trees are produced by the server's projection serializer. Response DTOs keep
//! every attribute optional because the attributes present depend on the projection a
//! handler asks for.

pub mod activity;
pub mod api;
pub mod camper;
pub mod signup;
