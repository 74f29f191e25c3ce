use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, camper::CamperRepository, signup::SignupRepository},
    error::{validation::ValidationError, AppError},
    model::{
        graph::{CampGraph, RootedGraph},
        signup::CreateSignupParams,
    },
};

pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a signup once both of its owners are confirmed to exist
    ///
    /// The reference checks, the insert and the reload of both owners share one
    /// transaction, so a rejected signup leaves the store untouched.
    ///
    /// # Returns
    /// - `Ok(RootedGraph)` - Graph rooted at the signup, holding its camper and activity
    /// - `Err(AppError::ValidationErr)` - The camper or activity does not exist
    /// - `Err(AppError::DbErr)` - Database error during any step
    pub async fn create(&self, params: CreateSignupParams) -> Result<RootedGraph, AppError> {
        let txn = self.db.begin().await?;

        let camper = CamperRepository::new(&txn)
            .find_by_id(params.camper_id())
            .await?
            .ok_or(ValidationError::UnresolvedReference {
                field: "camper_id",
                entity: "camper",
                id: params.camper_id(),
            })?;
        let activity = ActivityRepository::new(&txn)
            .find_by_id(params.activity_id())
            .await?
            .ok_or(ValidationError::UnresolvedReference {
                field: "activity_id",
                entity: "activity",
                id: params.activity_id(),
            })?;

        let signup = SignupRepository::new(&txn).create(&params).await?;

        txn.commit().await?;

        Ok(RootedGraph {
            root: signup.id,
            graph: CampGraph::new()
                .with_camper(camper)
                .with_activity(activity)
                .with_signup(signup),
        })
    }
}
