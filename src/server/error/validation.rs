use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorsDto;

/// Reason a write was rejected before reaching the database.
///
/// Every variant belongs to the `"validation"` category. The variant and its fields
/// identify which invariant failed; the HTTP response deliberately collapses them to a
/// generic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A text field is empty or contains only whitespace.
    #[error("{field} must not be empty")]
    Blank { field: &'static str },

    /// A numeric field (or the length of a text field) falls outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A required field was explicitly set to `null`.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A foreign key does not resolve to an existing row.
    #[error("{field} references {entity} {id} which does not exist")]
    UnresolvedReference {
        field: &'static str,
        entity: &'static str,
        id: i32,
    },

    /// The request body could not be decoded into the expected payload.
    #[error("Malformed request payload: {0}")]
    MalformedPayload(String),
}

impl ValidationError {
    pub const CATEGORY: &'static str = "validation";

    pub fn category(&self) -> &'static str {
        Self::CATEGORY
    }

    /// Name of the offending field, when the failure is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Blank { field }
            | Self::OutOfRange { field, .. }
            | Self::Required { field }
            | Self::UnresolvedReference { field, .. } => Some(field),
            Self::MalformedPayload(_) => None,
        }
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedPayload(rejection.body_text())
    }
}

/// Converts validation failures into a 400 Bad Request.
///
/// The structured reason is logged at debug level; clients only receive
/// `{"errors": ["validation errors"]}`.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(
            category = self.category(),
            field = self.field(),
            "Rejected write: {}",
            self
        );

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorsDto {
                errors: vec!["validation errors".to_string()],
            }),
        )
            .into_response()
    }
}
