use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "functionality_epic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub acquisition_id: i32,
    pub epic_id: String,
    pub epic_name: String,
    pub epic_status: Option<String>,
    pub epic_acquired_company: Option<String>,
    pub epic_link: Option<String>,
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
