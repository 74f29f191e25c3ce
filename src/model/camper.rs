use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::deserialize_present, signup::SignupDto};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signups: Option<Vec<SignupDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCamperDto {
    pub name: String,
    pub age: i32,
}

/// Partial update of a camper.
///
/// Omitted fields keep their current value. Fields sent as `null` are rejected since
/// neither attribute is nullable.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCamperDto {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,
}
