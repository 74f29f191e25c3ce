//! Activity domain model and parameters.

use crate::{
    model::activity::CreateActivityDto,
    server::{error::validation::ValidationError, model::validation::ACTIVITY_RULES},
};

/// An activity campers can sign up for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}

impl Activity {
    /// Edges denied whenever an activity is serialized.
    pub const SERIALIZE_RULES: &'static [&'static str] = &["signups.activity"];

    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            difficulty: entity.difficulty,
        }
    }
}

/// Validated parameters for creating an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateActivityParams {
    name: String,
    difficulty: i32,
}

impl CreateActivityParams {
    pub fn new(name: String, difficulty: i32) -> Result<Self, ValidationError> {
        ACTIVITY_RULES.check_text("name", &name)?;
        ACTIVITY_RULES.check_integer("difficulty", difficulty)?;

        Ok(Self { name, difficulty })
    }

    pub fn from_dto(dto: CreateActivityDto) -> Result<Self, ValidationError> {
        Self::new(dto.name, dto.difficulty)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }
}
