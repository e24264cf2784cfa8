use chrono::{NaiveDateTime, Utc};
use entity::{
    json::{RelevantLink, RelevantLinks, StringList},
    sea_orm_active_enums::{Category, ItemStatus},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Values for a new roadmap item, already validated.
pub struct CreateRoadmapItemParams {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub category: Category,
    pub status: ItemStatus,
    pub milestone_id: i32,
    pub pirate_metrics: Vec<String>,
    pub north_star_metrics: Vec<String>,
    pub relevant_links: Vec<RelevantLink>,
    pub product_dri: String,
    pub created_by_id: Option<i32>,
}

/// Column changes for an existing roadmap item, `None` leaves the column untouched.
#[derive(Default)]
pub struct RoadmapItemChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDateTime>,
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
    pub milestone_id: Option<i32>,
    pub pirate_metrics: Option<Vec<String>>,
    pub north_star_metrics: Option<Vec<String>>,
    pub relevant_links: Option<Vec<RelevantLink>>,
    pub product_dri: Option<String>,
    pub updated_by_id: Option<i32>,
}

pub struct RoadmapItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoadmapItemRepository<'a, C> {
    /// Creates a new instance of [`RoadmapItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateRoadmapItemParams,
    ) -> Result<entity::roadmap_item::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let item = entity::roadmap_item::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            date: ActiveValue::Set(params.date),
            category: ActiveValue::Set(params.category),
            status: ActiveValue::Set(params.status),
            milestone_id: ActiveValue::Set(params.milestone_id),
            pirate_metrics: ActiveValue::Set(StringList(params.pirate_metrics)),
            north_star_metrics: ActiveValue::Set(StringList(params.north_star_metrics)),
            relevant_links: ActiveValue::Set(RelevantLinks(params.relevant_links)),
            product_dri: ActiveValue::Set(params.product_dri),
            created_by_id: ActiveValue::Set(params.created_by_id),
            updated_by_id: ActiveValue::Set(params.created_by_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn get(&self, item_id: i32) -> Result<Option<entity::roadmap_item::Model>, DbErr> {
        entity::prelude::RoadmapItem::find_by_id(item_id)
            .one(self.db)
            .await
    }

    /// Gets all roadmap items in creation order
    pub async fn get_all(&self) -> Result<Vec<entity::roadmap_item::Model>, DbErr> {
        entity::prelude::RoadmapItem::find()
            .order_by_asc(entity::roadmap_item::Column::CreatedAt)
            .order_by_asc(entity::roadmap_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many(&self, item_ids: &[i32]) -> Result<Vec<entity::roadmap_item::Model>, DbErr> {
        entity::prelude::RoadmapItem::find()
            .filter(entity::roadmap_item::Column::Id.is_in(item_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Returns the subset of `item_ids` that exist
    pub async fn find_existing_ids(&self, item_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RoadmapItem::find()
            .select_only()
            .column(entity::roadmap_item::Column::Id)
            .filter(entity::roadmap_item::Column::Id.is_in(item_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Applies `changes`, returning `None` when the item does not exist
    pub async fn update(
        &self,
        item_id: i32,
        changes: RoadmapItemChanges,
    ) -> Result<Option<entity::roadmap_item::Model>, DbErr> {
        let Some(item) = self.get(item_id).await? else {
            return Ok(None);
        };

        let mut item_am = item.into_active_model();
        if let Some(title) = changes.title {
            item_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            item_am.description = ActiveValue::Set(description);
        }
        if let Some(date) = changes.date {
            item_am.date = ActiveValue::Set(date);
        }
        if let Some(category) = changes.category {
            item_am.category = ActiveValue::Set(category);
        }
        if let Some(status) = changes.status {
            item_am.status = ActiveValue::Set(status);
        }
        if let Some(milestone_id) = changes.milestone_id {
            item_am.milestone_id = ActiveValue::Set(milestone_id);
        }
        if let Some(pirate_metrics) = changes.pirate_metrics {
            item_am.pirate_metrics = ActiveValue::Set(StringList(pirate_metrics));
        }
        if let Some(north_star_metrics) = changes.north_star_metrics {
            item_am.north_star_metrics = ActiveValue::Set(StringList(north_star_metrics));
        }
        if let Some(relevant_links) = changes.relevant_links {
            item_am.relevant_links = ActiveValue::Set(RelevantLinks(relevant_links));
        }
        if let Some(product_dri) = changes.product_dri {
            item_am.product_dri = ActiveValue::Set(product_dri);
        }
        if let Some(updated_by_id) = changes.updated_by_id {
            item_am.updated_by_id = ActiveValue::Set(Some(updated_by_id));
        }
        item_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(item_am.update(self.db).await?))
    }

    /// Deletes a roadmap item
    ///
    /// Returns OK regardless of the item existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RoadmapItem::delete_by_id(item_id)
            .exec(self.db)
            .await
    }

    /// Number of items assigned to the milestone
    pub async fn count_by_milestone(&self, milestone_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RoadmapItem::find()
            .filter(entity::roadmap_item::Column::MilestoneId.eq(milestone_id))
            .count(self.db)
            .await
    }
}
