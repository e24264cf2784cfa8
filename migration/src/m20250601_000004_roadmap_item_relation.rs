use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000003_roadmap_item::RoadmapItem;

static IDX_ROADMAP_ITEM_RELATION_TO_ITEM_ID: &str = "idx-roadmap_item_relation-to_item_id";
static FK_ROADMAP_ITEM_RELATION_FROM_ITEM_ID: &str = "fk-roadmap_item_relation-from_item_id";
static FK_ROADMAP_ITEM_RELATION_TO_ITEM_ID: &str = "fk-roadmap_item_relation-to_item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoadmapItemRelation::Table)
                    .if_not_exists()
                    .col(integer(RoadmapItemRelation::FromItemId))
                    .col(integer(RoadmapItemRelation::ToItemId))
                    .primary_key(
                        Index::create()
                            .col(RoadmapItemRelation::FromItemId)
                            .col(RoadmapItemRelation::ToItemId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROADMAP_ITEM_RELATION_TO_ITEM_ID)
                    .table(RoadmapItemRelation::Table)
                    .col(RoadmapItemRelation::ToItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROADMAP_ITEM_RELATION_FROM_ITEM_ID)
                    .from_tbl(RoadmapItemRelation::Table)
                    .from_col(RoadmapItemRelation::FromItemId)
                    .to_tbl(RoadmapItem::Table)
                    .to_col(RoadmapItem::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROADMAP_ITEM_RELATION_TO_ITEM_ID)
                    .from_tbl(RoadmapItemRelation::Table)
                    .from_col(RoadmapItemRelation::ToItemId)
                    .to_tbl(RoadmapItem::Table)
                    .to_col(RoadmapItem::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ROADMAP_ITEM_RELATION_TO_ITEM_ID,
            FK_ROADMAP_ITEM_RELATION_FROM_ITEM_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(RoadmapItemRelation::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROADMAP_ITEM_RELATION_TO_ITEM_ID)
                    .table(RoadmapItemRelation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RoadmapItemRelation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RoadmapItemRelation {
    Table,
    FromItemId,
    ToItemId,
}
