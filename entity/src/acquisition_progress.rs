use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::Disposition;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "acquisition_progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub acquisition_id: i32,
    pub disposition: Option<Disposition>,
    pub dev_platform: bool,
    pub functionality_epics_to_do: i32,
    pub functionality_epics_in_progress: i32,
    pub functionality_epics_complete: i32,
    pub client_count_total: i32,
    pub client_access_count: i32,
    pub client_active_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::acquisition::Entity",
        from = "Column::AcquisitionId",
        to = "super::acquisition::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Acquisition,
}

impl Related<super::acquisition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Acquisition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
