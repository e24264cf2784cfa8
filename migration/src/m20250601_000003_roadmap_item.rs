use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_roadmap_user::RoadmapUser, m20250601_000002_milestone::Milestone};

static IDX_ROADMAP_ITEM_MILESTONE_ID: &str = "idx-roadmap_item-milestone_id";
static FK_ROADMAP_ITEM_MILESTONE_ID: &str = "fk-roadmap_item-milestone_id";
static FK_ROADMAP_ITEM_CREATED_BY_ID: &str = "fk-roadmap_item-created_by_id";
static FK_ROADMAP_ITEM_UPDATED_BY_ID: &str = "fk-roadmap_item-updated_by_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoadmapItem::Table)
                    .if_not_exists()
                    .col(pk_auto(RoadmapItem::Id))
                    .col(string(RoadmapItem::Title))
                    .col(text_null(RoadmapItem::Description))
                    .col(timestamp(RoadmapItem::Date))
                    .col(string(RoadmapItem::Category))
                    .col(string(RoadmapItem::Status))
                    .col(integer(RoadmapItem::MilestoneId))
                    .col(json(RoadmapItem::PirateMetrics))
                    .col(json(RoadmapItem::NorthStarMetrics))
                    .col(json(RoadmapItem::RelevantLinks))
                    .col(string(RoadmapItem::ProductDri).default(""))
                    .col(integer_null(RoadmapItem::CreatedById))
                    .col(integer_null(RoadmapItem::UpdatedById))
                    .col(timestamp(RoadmapItem::CreatedAt))
                    .col(timestamp(RoadmapItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROADMAP_ITEM_MILESTONE_ID)
                    .table(RoadmapItem::Table)
                    .col(RoadmapItem::MilestoneId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROADMAP_ITEM_MILESTONE_ID)
                    .from_tbl(RoadmapItem::Table)
                    .from_col(RoadmapItem::MilestoneId)
                    .to_tbl(Milestone::Table)
                    .to_col(Milestone::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROADMAP_ITEM_CREATED_BY_ID)
                    .from_tbl(RoadmapItem::Table)
                    .from_col(RoadmapItem::CreatedById)
                    .to_tbl(RoadmapUser::Table)
                    .to_col(RoadmapUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROADMAP_ITEM_UPDATED_BY_ID)
                    .from_tbl(RoadmapItem::Table)
                    .from_col(RoadmapItem::UpdatedById)
                    .to_tbl(RoadmapUser::Table)
                    .to_col(RoadmapUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ROADMAP_ITEM_UPDATED_BY_ID,
            FK_ROADMAP_ITEM_CREATED_BY_ID,
            FK_ROADMAP_ITEM_MILESTONE_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(RoadmapItem::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROADMAP_ITEM_MILESTONE_ID)
                    .table(RoadmapItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RoadmapItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RoadmapItem {
    Table,
    Id,
    Title,
    Description,
    Date,
    Category,
    Status,
    MilestoneId,
    PirateMetrics,
    NorthStarMetrics,
    RelevantLinks,
    ProductDri,
    CreatedById,
    UpdatedById,
    CreatedAt,
    UpdatedAt,
}
