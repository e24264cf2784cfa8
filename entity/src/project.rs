use sea_orm::entity::prelude::*;

use crate::json::RelevantLinks;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub relevant_links: RelevantLinks,
    pub start_milestone_id: Option<i32>,
    pub end_milestone_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::milestone::Entity",
        from = "Column::StartMilestoneId",
        to = "super::milestone::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    StartMilestone,
    #[sea_orm(
        belongs_to = "super::milestone::Entity",
        from = "Column::EndMilestoneId",
        to = "super::milestone::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    EndMilestone,
    #[sea_orm(has_many = "super::acquisition_project::Entity")]
    AcquisitionProject,
}

impl Related<super::acquisition::Entity> for Entity {
    fn to() -> RelationDef {
        super::acquisition_project::Relation::Acquisition.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::acquisition_project::Relation::Project.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
