use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, camper::CamperRepository, signup::SignupRepository},
    error::AppError,
    model::{
        camper::{CreateCamperParams, UpdateCamperParams},
        graph::{CampGraph, RootedGraph},
    },
};

pub struct CamperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every camper without relationships
    pub async fn get_all(&self) -> Result<CampGraph, AppError> {
        let campers = CamperRepository::new(self.db).get_all().await?;

        Ok(campers
            .into_iter()
            .fold(CampGraph::new(), |graph, camper| graph.with_camper(camper)))
    }

    /// Loads a camper together with its signups and the activities they reference
    ///
    /// # Returns
    /// - `Ok(Some(RootedGraph))` - Graph rooted at the camper
    /// - `Ok(None)` - No camper has this id
    /// - `Err(AppError::DbErr)` - Database error during any lookup
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RootedGraph>, AppError> {
        let Some(camper) = CamperRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let signups = SignupRepository::new(self.db).get_by_camper_id(id).await?;
        let mut activity_ids: Vec<i32> = signups.iter().map(|s| s.activity_id).collect();
        activity_ids.sort_unstable();
        activity_ids.dedup();
        let activities = ActivityRepository::new(self.db)
            .get_by_ids(&activity_ids)
            .await?;

        let mut graph = CampGraph::new().with_camper(camper);
        for activity in activities {
            graph.insert_activity(activity);
        }
        for signup in signups {
            graph.insert_signup(signup);
        }

        Ok(Some(RootedGraph { root: id, graph }))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(CamperRepository::new(self.db).exists(id).await?)
    }

    /// Creates a camper inside a transaction
    ///
    /// A new camper has no signups, so the graph holds only the camper itself.
    pub async fn create(&self, params: CreateCamperParams) -> Result<RootedGraph, AppError> {
        let txn = self.db.begin().await?;

        let camper = CamperRepository::new(&txn).create(&params).await?;

        txn.commit().await?;

        tracing::debug!(camper_id = camper.id, "created camper");

        Ok(RootedGraph {
            root: camper.id,
            graph: CampGraph::new().with_camper(camper),
        })
    }

    /// Applies a validated partial update inside a transaction
    ///
    /// # Returns
    /// - `Ok(Some(RootedGraph))` - Graph rooted at the updated camper
    /// - `Ok(None)` - No camper has this id; nothing was written
    /// - `Err(AppError::DbErr)` - Database error during the update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCamperParams,
    ) -> Result<Option<RootedGraph>, AppError> {
        let txn = self.db.begin().await?;

        let Some(camper) = CamperRepository::new(&txn).update(id, &params).await? else {
            return Ok(None);
        };

        txn.commit().await?;

        Ok(Some(RootedGraph {
            root: camper.id,
            graph: CampGraph::new().with_camper(camper),
        }))
    }
}
