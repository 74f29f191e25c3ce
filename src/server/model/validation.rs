//! Field rule tables checked before any write.
//!
//! Each entity declares a `RuleTable` keyed by field name. Params constructors run every
//! field they are about to assign through the table and return the first failure as a
//! `ValidationError`, so nothing reaches the database unless all assigned fields pass.

use crate::server::error::validation::ValidationError;

/// A single constraint on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must contain at least one non-whitespace character.
    NonEmpty,
    /// Inclusive bounds on an integer, or on the character count of text.
    Range { min: i64, max: i64 },
}

/// Value being assigned to a field, borrowed for checking.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
}

impl Rule {
    fn check(self, field: &'static str, value: FieldValue<'_>) -> Result<(), ValidationError> {
        match (self, value) {
            (Rule::NonEmpty, FieldValue::Text(text)) => {
                if text.trim().is_empty() {
                    return Err(ValidationError::Blank { field });
                }
                Ok(())
            }
            // An integer is always present once it has been decoded.
            (Rule::NonEmpty, FieldValue::Integer(_)) => Ok(()),
            (Rule::Range { min, max }, value) => {
                let measured = match value {
                    FieldValue::Text(text) => text.chars().count() as i64,
                    FieldValue::Integer(n) => n,
                };
                if measured < min || measured > max {
                    return Err(ValidationError::OutOfRange {
                        field,
                        value: measured,
                        min,
                        max,
                    });
                }
                Ok(())
            }
        }
    }
}

/// Constraints for one entity, keyed by field name.
///
/// A field may carry several rules; they are checked in declaration order. Fields
/// without an entry are unconstrained.
#[derive(Debug)]
pub struct RuleTable {
    rules: &'static [(&'static str, Rule)],
}

impl RuleTable {
    pub const fn new(rules: &'static [(&'static str, Rule)]) -> Self {
        Self { rules }
    }

    /// Rules registered for `field`.
    pub fn rules_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = Rule> + 'a {
        self.rules
            .iter()
            .filter(move |(name, _)| *name == field)
            .map(|(_, rule)| *rule)
    }

    /// Checks a single field assignment against every rule registered for it.
    pub fn check(&self, field: &'static str, value: FieldValue<'_>) -> Result<(), ValidationError> {
        self.rules_for(field)
            .try_for_each(|rule| rule.check(field, value))
    }

    pub fn check_text(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        self.check(field, FieldValue::Text(value))
    }

    pub fn check_integer(&self, field: &'static str, value: i32) -> Result<(), ValidationError> {
        self.check(field, FieldValue::Integer(value.into()))
    }
}

pub const CAMPER_RULES: RuleTable = RuleTable::new(&[
    ("name", Rule::NonEmpty),
    ("age", Rule::Range { min: 8, max: 18 }),
]);

pub const ACTIVITY_RULES: RuleTable = RuleTable::new(&[
    ("name", Rule::NonEmpty),
    ("difficulty", Rule::Range { min: 0, max: 10 }),
]);

pub const SIGNUP_RULES: RuleTable = RuleTable::new(&[("time", Rule::Range { min: 0, max: 23 })]);
