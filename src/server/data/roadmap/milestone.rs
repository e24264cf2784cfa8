use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct MilestoneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MilestoneRepository<'a, C> {
    /// Creates a new instance of [`MilestoneRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        date: NaiveDateTime,
    ) -> Result<entity::milestone::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let milestone = entity::milestone::ActiveModel {
            title: ActiveValue::Set(title),
            date: ActiveValue::Set(date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        milestone.insert(self.db).await
    }

    pub async fn get(&self, milestone_id: i32) -> Result<Option<entity::milestone::Model>, DbErr> {
        entity::prelude::Milestone::find_by_id(milestone_id)
            .one(self.db)
            .await
    }

    /// Gets all milestones ordered by date, oldest first
    pub async fn get_all(&self) -> Result<Vec<entity::milestone::Model>, DbErr> {
        entity::prelude::Milestone::find()
            .order_by_asc(entity::milestone::Column::Date)
            .order_by_asc(entity::milestone::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        milestone_ids: &[i32],
    ) -> Result<Vec<entity::milestone::Model>, DbErr> {
        entity::prelude::Milestone::find()
            .filter(entity::milestone::Column::Id.is_in(milestone_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Updates the provided fields, returning `None` when the milestone does not exist
    pub async fn update(
        &self,
        milestone_id: i32,
        title: Option<String>,
        date: Option<NaiveDateTime>,
    ) -> Result<Option<entity::milestone::Model>, DbErr> {
        let Some(milestone) = self.get(milestone_id).await? else {
            return Ok(None);
        };

        let mut milestone_am = milestone.into_active_model();
        if let Some(title) = title {
            milestone_am.title = ActiveValue::Set(title);
        }
        if let Some(date) = date {
            milestone_am.date = ActiveValue::Set(date);
        }
        milestone_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(milestone_am.update(self.db).await?))
    }

    /// Deletes a milestone
    ///
    /// Returns OK regardless of the milestone existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, milestone_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Milestone::delete_by_id(milestone_id)
            .exec(self.db)
            .await
    }
}
