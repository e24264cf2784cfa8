use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000005_acquisition::Acquisition;

static FK_ACQUISITION_PROGRESS_ACQUISITION_ID: &str = "fk-acquisition_progress-acquisition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcquisitionProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(AcquisitionProgress::Id))
                    .col(integer_uniq(AcquisitionProgress::AcquisitionId))
                    .col(string_null(AcquisitionProgress::Disposition))
                    .col(boolean(AcquisitionProgress::DevPlatform).default(false))
                    .col(integer(AcquisitionProgress::FunctionalityEpicsToDo).default(0))
                    .col(integer(AcquisitionProgress::FunctionalityEpicsInProgress).default(0))
                    .col(integer(AcquisitionProgress::FunctionalityEpicsComplete).default(0))
                    .col(integer(AcquisitionProgress::ClientCountTotal).default(0))
                    .col(integer(AcquisitionProgress::ClientAccessCount).default(0))
                    .col(integer(AcquisitionProgress::ClientActiveCount).default(0))
                    .col(timestamp(AcquisitionProgress::CreatedAt))
                    .col(timestamp(AcquisitionProgress::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACQUISITION_PROGRESS_ACQUISITION_ID)
                    .from_tbl(AcquisitionProgress::Table)
                    .from_col(AcquisitionProgress::AcquisitionId)
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
                    .name(FK_ACQUISITION_PROGRESS_ACQUISITION_ID)
                    .table(AcquisitionProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AcquisitionProgress::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AcquisitionProgress {
    Table,
    Id,
    AcquisitionId,
    Disposition,
    DevPlatform,
    FunctionalityEpicsToDo,
    FunctionalityEpicsInProgress,
    FunctionalityEpicsComplete,
    ClientCountTotal,
    ClientAccessCount,
    ClientActiveCount,
    CreatedAt,
    UpdatedAt,
}
