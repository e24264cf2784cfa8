use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_milestone::Milestone;

static FK_PROJECT_START_MILESTONE_ID: &str = "fk-project-start_milestone_id";
static FK_PROJECT_END_MILESTONE_ID: &str = "fk-project-end_milestone_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Title))
                    .col(text_null(Project::Description))
                    .col(json(Project::RelevantLinks))
                    .col(integer_null(Project::StartMilestoneId))
                    .col(integer_null(Project::EndMilestoneId))
                    .col(timestamp(Project::CreatedAt))
                    .col(timestamp(Project::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_START_MILESTONE_ID)
                    .from_tbl(Project::Table)
                    .from_col(Project::StartMilestoneId)
                    .to_tbl(Milestone::Table)
                    .to_col(Milestone::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_END_MILESTONE_ID)
                    .from_tbl(Project::Table)
                    .from_col(Project::EndMilestoneId)
                    .to_tbl(Milestone::Table)
                    .to_col(Milestone::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_PROJECT_END_MILESTONE_ID, FK_PROJECT_START_MILESTONE_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(Project::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    Title,
    Description,
    RelevantLinks,
    StartMilestoneId,
    EndMilestoneId,
    CreatedAt,
    UpdatedAt,
}
