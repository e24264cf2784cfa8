use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000005_acquisition::Acquisition;

static IDX_FUNCTIONALITY_EPIC_ACQUISITION_ID: &str = "idx-functionality_epic-acquisition_id";
static FK_FUNCTIONALITY_EPIC_ACQUISITION_ID: &str = "fk-functionality_epic-acquisition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FunctionalityEpic::Table)
                    .if_not_exists()
                    .col(pk_auto(FunctionalityEpic::Id))
                    .col(integer(FunctionalityEpic::AcquisitionId))
                    .col(string(FunctionalityEpic::EpicId))
                    .col(string(FunctionalityEpic::EpicName))
                    .col(string_null(FunctionalityEpic::EpicStatus))
                    .col(string_null(FunctionalityEpic::EpicAcquiredCompany))
                    .col(string_null(FunctionalityEpic::EpicLink))
                    .col(timestamp(FunctionalityEpic::CreatedAt))
                    .col(timestamp(FunctionalityEpic::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FUNCTIONALITY_EPIC_ACQUISITION_ID)
                    .table(FunctionalityEpic::Table)
                    .col(FunctionalityEpic::AcquisitionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FUNCTIONALITY_EPIC_ACQUISITION_ID)
                    .from_tbl(FunctionalityEpic::Table)
                    .from_col(FunctionalityEpic::AcquisitionId)
                    .to_tbl(Acquisition::Table)
                    .to_col(Acquisition::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FUNCTIONALITY_EPIC_ACQUISITION_ID)
                    .table(FunctionalityEpic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FUNCTIONALITY_EPIC_ACQUISITION_ID)
                    .table(FunctionalityEpic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FunctionalityEpic::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FunctionalityEpic {
    Table,
    Id,
    AcquisitionId,
    EpicId,
    EpicName,
    EpicStatus,
    EpicAcquiredCompany,
    EpicLink,
    CreatedAt,
    UpdatedAt,
}
