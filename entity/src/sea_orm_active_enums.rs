use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "Product")]
    Product,
    #[sea_orm(string_value = "AI")]
    Ai,
    #[sea_orm(string_value = "Integrations")]
    Integrations,
    #[sea_orm(string_value = "Branding")]
    Branding,
    #[sea_orm(string_value = "Migrations")]
    Migrations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ItemStatus {
    #[sea_orm(string_value = "planned")]
    Planned,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Disposition {
    #[sea_orm(string_value = "Standalone")]
    Standalone,
    #[sea_orm(string_value = "Wrapped")]
    Wrapped,
    #[sea_orm(string_value = "Deprecating")]
    Deprecating,
}
