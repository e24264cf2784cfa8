use sea_orm::{ColumnTrait, ConnectionTrait, Condition, DbErr, EntityTrait, QueryFilter};

pub struct RoadmapItemRelationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoadmapItemRelationRepository<'a, C> {
    /// Creates a new instance of [`RoadmapItemRelationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces the outgoing related items of `from_item_id` with `to_item_ids`
    ///
    /// Self references and duplicate ids are skipped.
    pub async fn replace_outgoing(&self, from_item_id: i32, to_item_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::RoadmapItemRelation::delete_many()
            .filter(entity::roadmap_item_relation::Column::FromItemId.eq(from_item_id))
            .exec(self.db)
            .await?;

        let mut inserted: Vec<i32> = Vec::with_capacity(to_item_ids.len());
        for &to_item_id in to_item_ids {
            if to_item_id == from_item_id || inserted.contains(&to_item_id) {
                continue;
            }

            entity::prelude::RoadmapItemRelation::insert(
                entity::roadmap_item_relation::ActiveModel {
                    from_item_id: sea_orm::ActiveValue::Set(from_item_id),
                    to_item_id: sea_orm::ActiveValue::Set(to_item_id),
                },
            )
            .exec_without_returning(self.db)
            .await?;

            inserted.push(to_item_id);
        }

        Ok(())
    }

    /// Gets every relation row touching one of `item_ids` in either direction
    pub async fn get_for_items(
        &self,
        item_ids: &[i32],
    ) -> Result<Vec<entity::roadmap_item_relation::Model>, DbErr> {
        entity::prelude::RoadmapItemRelation::find()
            .filter(
                Condition::any()
                    .add(
                        entity::roadmap_item_relation::Column::FromItemId
                            .is_in(item_ids.iter().copied()),
                    )
                    .add(
                        entity::roadmap_item_relation::Column::ToItemId
                            .is_in(item_ids.iter().copied()),
                    ),
            )
            .all(self.db)
            .await
    }

    /// Deletes every relation row referencing the item
    pub async fn delete_for_item(&self, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RoadmapItemRelation::delete_many()
            .filter(
                Condition::any()
                    .add(entity::roadmap_item_relation::Column::FromItemId.eq(item_id))
                    .add(entity::roadmap_item_relation::Column::ToItemId.eq(item_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
