//! Activity factory for creating test activity entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::activity::ActivityFactory;
///
/// let activity = ActivityFactory::new(&db)
///     .name("Archery")
///     .difficulty(3)
///     .build()
///     .await?;
/// ```
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    difficulty: i32,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Activity {id}"` where id is auto-incremented
    /// - difficulty: `5`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Activity {}", id),
            difficulty: 5,
        }
    }

    /// Sets the activity name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the activity difficulty.
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Builds and inserts the activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::activity::Model)` - Created activity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            difficulty: ActiveValue::Set(self.difficulty),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}
