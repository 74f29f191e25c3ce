use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    model::{
        activity::CreateActivityParams,
        graph::{CampGraph, RootedGraph},
    },
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every activity without relationships
    pub async fn get_all(&self) -> Result<CampGraph, AppError> {
        let activities = ActivityRepository::new(self.db).get_all().await?;

        Ok(activities
            .into_iter()
            .fold(CampGraph::new(), |graph, activity| {
                graph.with_activity(activity)
            }))
    }

    /// Creates an activity inside a transaction
    pub async fn create(&self, params: CreateActivityParams) -> Result<RootedGraph, AppError> {
        let txn = self.db.begin().await?;

        let activity = ActivityRepository::new(&txn).create(&params).await?;

        txn.commit().await?;

        Ok(RootedGraph {
            root: activity.id,
            graph: CampGraph::new().with_activity(activity),
        })
    }

    /// Deletes an activity and, through the cascade, all of its signups
    ///
    /// # Returns
    /// - `Ok(true)` - The activity existed and was deleted
    /// - `Ok(false)` - No activity has this id; nothing was written
    /// - `Err(AppError::DbErr)` - Database error during the delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let rows = ActivityRepository::new(&txn).delete(id).await?;
        if rows == 0 {
            return Ok(false);
        }

        txn.commit().await?;

        tracing::debug!(activity_id = id, "deleted activity");

        Ok(true)
    }
}
