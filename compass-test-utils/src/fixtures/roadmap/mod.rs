//! Roadmap fixtures: milestones, items and item relations.

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::{
    json::{RelevantLinks, StringList},
    sea_orm_active_enums::{Category, ItemStatus},
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{TestContext, TestError};

impl TestContext {
    pub fn roadmap<'a>(&'a self) -> RoadmapFixtures<'a> {
        RoadmapFixtures { setup: self }
    }
}

pub struct RoadmapFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RoadmapFixtures<'a> {
    /// Insert a milestone dated at midnight of `date`.
    pub async fn insert_milestone(
        &self,
        title: &str,
        date: NaiveDate,
    ) -> Result<entity::milestone::Model, TestError> {
        let now = Utc::now().naive_utc();

        let milestone = entity::milestone::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            date: ActiveValue::Set(date.and_time(NaiveTime::MIN)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(milestone)
    }

    /// Insert a planned product item belonging to `milestone_id`.
    pub async fn insert_item(
        &self,
        title: &str,
        milestone_id: i32,
    ) -> Result<entity::roadmap_item::Model, TestError> {
        self.insert_item_with(title, milestone_id, Category::Product, ItemStatus::Planned)
            .await
    }

    pub async fn insert_item_with(
        &self,
        title: &str,
        milestone_id: i32,
        category: Category,
        status: ItemStatus,
    ) -> Result<entity::roadmap_item::Model, TestError> {
        let now = Utc::now().naive_utc();

        let item = entity::roadmap_item::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(None),
            date: ActiveValue::Set(now),
            category: ActiveValue::Set(category),
            status: ActiveValue::Set(status),
            milestone_id: ActiveValue::Set(milestone_id),
            pirate_metrics: ActiveValue::Set(StringList::default()),
            north_star_metrics: ActiveValue::Set(StringList::default()),
            relevant_links: ActiveValue::Set(RelevantLinks::default()),
            product_dri: ActiveValue::Set(String::new()),
            created_by_id: ActiveValue::Set(None),
            updated_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(item)
    }

    /// Record `to_item_id` as an outgoing related item of `from_item_id`.
    pub async fn relate_items(&self, from_item_id: i32, to_item_id: i32) -> Result<(), TestError> {
        entity::prelude::RoadmapItemRelation::insert(entity::roadmap_item_relation::ActiveModel {
            from_item_id: ActiveValue::Set(from_item_id),
            to_item_id: ActiveValue::Set(to_item_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
