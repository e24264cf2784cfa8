use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoadmapUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RoadmapUser::Id))
                    .col(string_uniq(RoadmapUser::Email))
                    .col(string_null(RoadmapUser::Name))
                    .col(string_null(RoadmapUser::Image))
                    .col(timestamp(RoadmapUser::CreatedAt))
                    .col(timestamp(RoadmapUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoadmapUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RoadmapUser {
    Table,
    Id,
    Email,
    Name,
    Image,
    CreatedAt,
    UpdatedAt,
}
