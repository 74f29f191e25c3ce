use crate::server::{data::activity::ActivityRepository, model::activity::CreateActivityParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_ids;
