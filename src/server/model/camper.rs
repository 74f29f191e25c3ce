//! Camper domain model and parameters.
//!
//! `CreateCamperParams` and `UpdateCamperParams` can only be obtained through their
//! constructors, which run every assigned field through `CAMPER_RULES`. Holding one of
//! these values therefore means the write it describes is valid.

use crate::{
    model::camper::{CreateCamperDto, UpdateCamperDto},
    server::{error::validation::ValidationError, model::validation::CAMPER_RULES},
};

/// A camper enrolled in the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl Camper {
    /// Edges denied whenever a camper is serialized.
    ///
    /// A camper's signups never embed the camper again.
    pub const SERIALIZE_RULES: &'static [&'static str] = &["signups.camper"];

    /// Converts an entity model to the camper domain model at the repository boundary.
    pub fn from_entity(entity: entity::camper::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
        }
    }
}

/// Validated parameters for creating a camper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCamperParams {
    name: String,
    age: i32,
}

impl CreateCamperParams {
    /// Validates both fields and returns the params, or the first failed rule.
    pub fn new(name: String, age: i32) -> Result<Self, ValidationError> {
        CAMPER_RULES.check_text("name", &name)?;
        CAMPER_RULES.check_integer("age", age)?;

        Ok(Self { name, age })
    }

    pub fn from_dto(dto: CreateCamperDto) -> Result<Self, ValidationError> {
        Self::new(dto.name, dto.age)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

/// Validated parameters for a partial camper update.
///
/// `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCamperParams {
    name: Option<String>,
    age: Option<i32>,
}

impl UpdateCamperParams {
    /// Validates every supplied field; a single failure rejects the whole update.
    pub fn new(name: Option<String>, age: Option<i32>) -> Result<Self, ValidationError> {
        if let Some(ref name) = name {
            CAMPER_RULES.check_text("name", name)?;
        }
        if let Some(age) = age {
            CAMPER_RULES.check_integer("age", age)?;
        }

        Ok(Self { name, age })
    }

    /// Converts a PATCH payload, rejecting fields explicitly sent as `null`.
    pub fn from_dto(dto: UpdateCamperDto) -> Result<Self, ValidationError> {
        let name = match dto.name {
            Some(None) => return Err(ValidationError::Required { field: "name" }),
            Some(value) => value,
            None => None,
        };
        let age = match dto.age {
            Some(None) => return Err(ValidationError::Required { field: "age" }),
            Some(value) => value,
            None => None,
        };

        Self::new(name, age)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// True when the update would not change any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
