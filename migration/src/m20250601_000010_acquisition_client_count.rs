use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000005_acquisition::Acquisition;

static IDX_ACQUISITION_CLIENT_COUNT_ACQUISITION_ID: &str =
    "idx-acquisition_client_count-acquisition_id";
static FK_ACQUISITION_CLIENT_COUNT_ACQUISITION_ID: &str =
    "fk-acquisition_client_count-acquisition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcquisitionClientCount::Table)
                    .if_not_exists()
                    .col(pk_auto(AcquisitionClientCount::Id))
                    .col(integer(AcquisitionClientCount::AcquisitionId))
                    .col(string(AcquisitionClientCount::ClientVitallyId))
                    .col(string_null(AcquisitionClientCount::OrgId))
                    .col(string(AcquisitionClientCount::ClientName))
                    .col(boolean(AcquisitionClientCount::ActiveInConsole).default(false))
                    .col(timestamp(AcquisitionClientCount::CreatedAt))
                    .col(timestamp(AcquisitionClientCount::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACQUISITION_CLIENT_COUNT_ACQUISITION_ID)
                    .table(AcquisitionClientCount::Table)
                    .col(AcquisitionClientCount::AcquisitionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACQUISITION_CLIENT_COUNT_ACQUISITION_ID)
                    .from_tbl(AcquisitionClientCount::Table)
                    .from_col(AcquisitionClientCount::AcquisitionId)
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
                    .name(FK_ACQUISITION_CLIENT_COUNT_ACQUISITION_ID)
                    .table(AcquisitionClientCount::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACQUISITION_CLIENT_COUNT_ACQUISITION_ID)
                    .table(AcquisitionClientCount::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(AcquisitionClientCount::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AcquisitionClientCount {
    Table,
    Id,
    AcquisitionId,
    ClientVitallyId,
    OrgId,
    ClientName,
    ActiveInConsole,
    CreatedAt,
    UpdatedAt,
}
