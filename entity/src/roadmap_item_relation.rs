//! Self-referential join table behind `relatedItems` / `relatedTo`.
//!
//! A row `(from_item_id, to_item_id)` means `to_item_id` is listed in the related items of
//! `from_item_id`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roadmap_item_relation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub from_item_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub to_item_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roadmap_item::Entity",
        from = "Column::FromItemId",
        to = "super::roadmap_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FromItem,
    #[sea_orm(
        belongs_to = "super::roadmap_item::Entity",
        from = "Column::ToItemId",
        to = "super::roadmap_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ToItem,
}

impl ActiveModelBehavior for ActiveModel {}
