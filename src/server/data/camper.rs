//! Camper data repository for database operations.
//!
//! Provides the `CamperRepository` for creating, reading and partially updating campers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::camper::{Camper, CreateCamperParams, UpdateCamperParams};

pub struct CamperRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CamperRepository<'a, C> {
    /// Creates a new CamperRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `CamperRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new camper
    ///
    /// # Arguments
    /// - `params` - Validated camper fields
    ///
    /// # Returns
    /// - `Ok(Camper)` - The created camper with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: &CreateCamperParams) -> Result<Camper, DbErr> {
        let camper = entity::camper::ActiveModel {
            name: ActiveValue::Set(params.name().to_string()),
            age: ActiveValue::Set(params.age()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Camper::from_entity(camper))
    }

    /// Gets all campers ordered by id
    pub async fn get_all(&self) -> Result<Vec<Camper>, DbErr> {
        let campers = entity::prelude::Camper::find()
            .order_by_asc(entity::camper::Column::Id)
            .all(self.db)
            .await?;

        Ok(campers.into_iter().map(Camper::from_entity).collect())
    }

    /// Finds a camper by id
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - The camper if found
    /// - `Ok(None)` - No camper has this id
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Camper>, DbErr> {
        let camper = entity::prelude::Camper::find_by_id(id).one(self.db).await?;

        Ok(camper.map(Camper::from_entity))
    }

    /// Applies a partial update to a camper
    ///
    /// Only the fields present in `params` are written. An empty update returns the
    /// current row without issuing an UPDATE.
    ///
    /// # Arguments
    /// - `id` - Id of the camper to update
    /// - `params` - Validated fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - The camper after the update
    /// - `Ok(None)` - No camper has this id
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        id: i32,
        params: &UpdateCamperParams,
    ) -> Result<Option<Camper>, DbErr> {
        let Some(camper) = entity::prelude::Camper::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(Camper::from_entity(camper)));
        }

        let mut active_model: entity::camper::ActiveModel = camper.into();
        if let Some(name) = params.name() {
            active_model.name = ActiveValue::Set(name.to_string());
        }
        if let Some(age) = params.age() {
            active_model.age = ActiveValue::Set(age);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Camper::from_entity(updated)))
    }

    /// Checks whether a camper with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Camper::find()
            .filter(entity::camper::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
