use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "acquisition")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub integration_overview: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::acquisition_progress::Entity")]
    AcquisitionProgress,
    #[sea_orm(has_many = "super::functionality_epic::Entity")]
    FunctionalityEpic,
    #[sea_orm(has_many = "super::acquisition_client_count::Entity")]
    AcquisitionClientCount,
    #[sea_orm(has_many = "super::acquisition_project::Entity")]
    AcquisitionProject,
}

impl Related<super::acquisition_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcquisitionProgress.def()
    }
}

impl Related<super::functionality_epic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FunctionalityEpic.def()
    }
}

impl Related<super::acquisition_client_count::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcquisitionClientCount.def()
    }
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        super::acquisition_project::Relation::Project.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::acquisition_project::Relation::Acquisition.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
