use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body returned for lookups of a missing entity and for internal errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned for any rejected write.
///
/// The list is intentionally generic; the reason a write was rejected is logged
/// server-side only.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorsDto {
    pub errors: Vec<String>,
}

/// Distinguishes an omitted field from one explicitly set to `null`.
///
/// Used with `#[serde(default, deserialize_with = "deserialize_present")]` on an
/// `Option<Option<T>>` field: omitted yields `None`, `null` yields `Some(None)` and a
/// value yields `Some(Some(value))`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
