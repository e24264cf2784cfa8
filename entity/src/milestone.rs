use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "milestone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub date: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roadmap_item::Entity")]
    RoadmapItem,
}

impl Related<super::roadmap_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoadmapItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
