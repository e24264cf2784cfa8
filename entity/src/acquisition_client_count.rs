use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "acquisition_client_count")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub acquisition_id: i32,
    pub client_vitally_id: String,
    pub org_id: Option<String>,
    pub client_name: String,
    pub active_in_console: bool,
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
