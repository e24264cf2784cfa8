use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000005_acquisition::Acquisition, m20250601_000006_project::Project};

static IDX_ACQUISITION_PROJECT_PROJECT_ID: &str = "idx-acquisition_project-project_id";
static FK_ACQUISITION_PROJECT_ACQUISITION_ID: &str = "fk-acquisition_project-acquisition_id";
static FK_ACQUISITION_PROJECT_PROJECT_ID: &str = "fk-acquisition_project-project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcquisitionProject::Table)
                    .if_not_exists()
                    .col(integer(AcquisitionProject::AcquisitionId))
                    .col(integer(AcquisitionProject::ProjectId))
                    .primary_key(
                        Index::create()
                            .col(AcquisitionProject::AcquisitionId)
                            .col(AcquisitionProject::ProjectId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACQUISITION_PROJECT_PROJECT_ID)
                    .table(AcquisitionProject::Table)
                    .col(AcquisitionProject::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACQUISITION_PROJECT_ACQUISITION_ID)
                    .from_tbl(AcquisitionProject::Table)
                    .from_col(AcquisitionProject::AcquisitionId)
                    .to_tbl(Acquisition::Table)
                    .to_col(Acquisition::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACQUISITION_PROJECT_PROJECT_ID)
                    .from_tbl(AcquisitionProject::Table)
                    .from_col(AcquisitionProject::ProjectId)
                    .to_tbl(Project::Table)
                    .to_col(Project::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ACQUISITION_PROJECT_PROJECT_ID,
            FK_ACQUISITION_PROJECT_ACQUISITION_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(AcquisitionProject::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACQUISITION_PROJECT_PROJECT_ID)
                    .table(AcquisitionProject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AcquisitionProject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AcquisitionProject {
    Table,
    AcquisitionId,
    ProjectId,
}
