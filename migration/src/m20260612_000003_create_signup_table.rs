use sea_orm_migration::{prelude::*, schema::*};

use super::m20260612_000001_create_camper_table::Campers;
use super::m20260612_000002_create_activity_table::Activities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signups::Table)
                    .if_not_exists()
                    .col(pk_auto(Signups::Id))
                    .col(integer(Signups::Time))
                    .col(integer(Signups::CamperId))
                    .col(integer(Signups::ActivityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_camper_id")
                            .from(Signups::Table, Signups::CamperId)
                            .to(Campers::Table, Campers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_activity_id")
                            .from(Signups::Table, Signups::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_signups_camper_id")
                    .table(Signups::Table)
                    .col(Signups::CamperId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_signups_activity_id")
                    .table(Signups::Table)
                    .col(Signups::ActivityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Signups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Signups {
    Table,
    Id,
    Time,
    CamperId,
    ActivityId,
}
