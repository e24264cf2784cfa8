use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Acquisition::Table)
                    .if_not_exists()
                    .col(pk_auto(Acquisition::Id))
                    .col(string(Acquisition::Name))
                    .col(text_null(Acquisition::Description))
                    .col(text_null(Acquisition::IntegrationOverview))
                    .col(string_null(Acquisition::Color))
                    .col(timestamp(Acquisition::CreatedAt))
                    .col(timestamp(Acquisition::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Acquisition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Acquisition {
    Table,
    Id,
    Name,
    Description,
    IntegrationOverview,
    Color,
    CreatedAt,
    UpdatedAt,
}
