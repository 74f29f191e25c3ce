//! Activity data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::activity::{Activity, CreateActivityParams};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new activity
    pub async fn create(&self, params: &CreateActivityParams) -> Result<Activity, DbErr> {
        let activity = entity::activity::ActiveModel {
            name: ActiveValue::Set(params.name().to_string()),
            difficulty: ActiveValue::Set(params.difficulty()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(activity))
    }

    /// Gets all activities ordered by id
    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }

    /// Finds an activity by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let activity = entity::prelude::Activity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(activity.map(Activity::from_entity))
    }

    /// Gets the activities with the given ids, ordered by id
    ///
    /// Ids without a matching row are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Activity>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let activities = entity::prelude::Activity::find()
            .filter(entity::activity::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }

    /// Deletes an activity; its signups are removed by the foreign key cascade
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of activity rows deleted, `0` when the id does not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Activity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
