//! HTTP request handlers.
//!
//! Each handler decodes its payload, builds validated params, calls a service and renders
//! the returned graph through a `Projection`. Payload decoding failures are mapped to
//! validation errors so every rejected write answers with the same 400 body.

pub mod activity;
pub mod camper;
pub mod home;
pub mod signup;

#[cfg(test)]
mod test;

use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::AppError;

/// Extracts an `{id}` path segment.
///
/// An id that does not parse as an `i32` can never match a row, so it answers with the
/// same not found error as a missing row instead of axum's plain-text rejection.
fn path_id(path: Result<Path<i32>, PathRejection>, entity: &str) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(format!("{} not found", entity)))
}
