use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{activity::ActivityDto, camper::CamperDto};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camper_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub camper: Option<CamperDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub activity: Option<ActivityDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSignupDto {
    pub camper_id: i32,
    pub activity_id: i32,
    pub time: i32,
}
