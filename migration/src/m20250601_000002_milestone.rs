use sea_orm_migration::{prelude::*, schema::*};

static IDX_MILESTONE_DATE: &str = "idx-milestone-date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Milestone::Table)
                    .if_not_exists()
                    .col(pk_auto(Milestone::Id))
                    .col(string(Milestone::Title))
                    .col(timestamp(Milestone::Date))
                    .col(timestamp(Milestone::CreatedAt))
                    .col(timestamp(Milestone::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MILESTONE_DATE)
                    .table(Milestone::Table)
                    .col(Milestone::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MILESTONE_DATE)
                    .table(Milestone::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Milestone::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Milestone {
    Table,
    Id,
    Title,
    Date,
    CreatedAt,
    UpdatedAt,
}
