use sea_orm::entity::prelude::*;

use crate::{
    json::{RelevantLinks, StringList},
    sea_orm_active_enums::{Category, ItemStatus},
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roadmap_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub date: DateTime,
    pub category: Category,
    pub status: ItemStatus,
    pub milestone_id: i32,
    #[sea_orm(column_type = "Json")]
    pub pirate_metrics: StringList,
    #[sea_orm(column_type = "Json")]
    pub north_star_metrics: StringList,
    #[sea_orm(column_type = "Json")]
    pub relevant_links: RelevantLinks,
    pub product_dri: String,
    pub created_by_id: Option<i32>,
    pub updated_by_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::milestone::Entity",
        from = "Column::MilestoneId",
        to = "super::milestone::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Milestone,
    #[sea_orm(
        belongs_to = "super::roadmap_user::Entity",
        from = "Column::CreatedById",
        to = "super::roadmap_user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CreatedBy,
    #[sea_orm(
        belongs_to = "super::roadmap_user::Entity",
        from = "Column::UpdatedById",
        to = "super::roadmap_user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    UpdatedBy,
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
