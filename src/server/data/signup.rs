//! Signup data repository for database operations.
//!
//! Signups are only ever inserted directly. They disappear through the cascade when their
//! camper or activity is deleted.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::signup::{CreateSignupParams, Signup};

pub struct SignupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SignupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new signup
    ///
    /// The caller is expected to have confirmed both references exist; a dangling
    /// reference surfaces as a foreign key violation from the database.
    pub async fn create(&self, params: &CreateSignupParams) -> Result<Signup, DbErr> {
        let signup = entity::signup::ActiveModel {
            time: ActiveValue::Set(params.time()),
            camper_id: ActiveValue::Set(params.camper_id()),
            activity_id: ActiveValue::Set(params.activity_id()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Signup::from_entity(signup))
    }

    /// Gets every signup belonging to a camper, ordered by id
    pub async fn get_by_camper_id(&self, camper_id: i32) -> Result<Vec<Signup>, DbErr> {
        let signups = entity::prelude::Signup::find()
            .filter(entity::signup::Column::CamperId.eq(camper_id))
            .order_by_asc(entity::signup::Column::Id)
            .all(self.db)
            .await?;

        Ok(signups.into_iter().map(Signup::from_entity).collect())
    }
}
