//! Signup domain model and parameters.
//!
//! The time range is checked when params are constructed. Whether the referenced camper
//! and activity exist can only be answered by the store, so the signup service resolves
//! both references inside the creating transaction.

use crate::{
    model::signup::CreateSignupDto,
    server::{error::validation::ValidationError, model::validation::SIGNUP_RULES},
};

/// A camper's signup for an activity at a given hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}

impl Signup {
    /// Edges denied whenever a signup is serialized.
    ///
    /// The camper and activity of a signup are rendered without their own signup lists.
    pub const SERIALIZE_RULES: &'static [&'static str] = &["camper.signups", "activity.signups"];

    pub fn from_entity(entity: entity::signup::Model) -> Self {
        Self {
            id: entity.id,
            time: entity.time,
            camper_id: entity.camper_id,
            activity_id: entity.activity_id,
        }
    }
}

/// Validated parameters for creating a signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSignupParams {
    camper_id: i32,
    activity_id: i32,
    time: i32,
}

impl CreateSignupParams {
    pub fn new(camper_id: i32, activity_id: i32, time: i32) -> Result<Self, ValidationError> {
        SIGNUP_RULES.check_integer("time", time)?;

        Ok(Self {
            camper_id,
            activity_id,
            time,
        })
    }

    pub fn from_dto(dto: CreateSignupDto) -> Result<Self, ValidationError> {
        Self::new(dto.camper_id, dto.activity_id, dto.time)
    }

    pub fn camper_id(&self) -> i32 {
        self.camper_id
    }

    pub fn activity_id(&self) -> i32 {
        self.activity_id
    }

    pub fn time(&self) -> i32 {
        self.time
    }
}
