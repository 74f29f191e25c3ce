use crate::server::{data::signup::SignupRepository, model::signup::CreateSignupParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_camper_id;
