use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CreateEpicParams {
    pub acquisition_id: i32,
    pub epic_id: String,
    pub epic_name: String,
    pub epic_status: Option<String>,
    pub epic_acquired_company: Option<String>,
    pub epic_link: Option<String>,
}

/// Column changes for an epic, `None` leaves the column untouched.
#[derive(Default)]
pub struct EpicChanges {
    pub epic_id: Option<String>,
    pub epic_name: Option<String>,
    pub epic_status: Option<Option<String>>,
    pub epic_acquired_company: Option<Option<String>>,
    pub epic_link: Option<Option<String>>,
}

pub struct FunctionalityEpicRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FunctionalityEpicRepository<'a, C> {
    /// Creates a new instance of [`FunctionalityEpicRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateEpicParams,
    ) -> Result<entity::functionality_epic::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let epic = entity::functionality_epic::ActiveModel {
            acquisition_id: ActiveValue::Set(params.acquisition_id),
            epic_id: ActiveValue::Set(params.epic_id),
            epic_name: ActiveValue::Set(params.epic_name),
            epic_status: ActiveValue::Set(params.epic_status),
            epic_acquired_company: ActiveValue::Set(params.epic_acquired_company),
            epic_link: ActiveValue::Set(params.epic_link),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        epic.insert(self.db).await
    }

    pub async fn get(&self, epic_id: i32) -> Result<Option<entity::functionality_epic::Model>, DbErr> {
        entity::prelude::FunctionalityEpic::find_by_id(epic_id)
            .one(self.db)
            .await
    }

    /// Gets epics, newest first, optionally limited to one acquisition
    pub async fn get_all(
        &self,
        acquisition_id: Option<i32>,
    ) -> Result<Vec<entity::functionality_epic::Model>, DbErr> {
        let mut query = entity::prelude::FunctionalityEpic::find();
        if let Some(acquisition_id) = acquisition_id {
            query =
                query.filter(entity::functionality_epic::Column::AcquisitionId.eq(acquisition_id));
        }

        query
            .order_by_desc(entity::functionality_epic::Column::CreatedAt)
            .order_by_desc(entity::functionality_epic::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_acquisition_ids(
        &self,
        acquisition_ids: &[i32],
    ) -> Result<Vec<entity::functionality_epic::Model>, DbErr> {
        entity::prelude::FunctionalityEpic::find()
            .filter(
                entity::functionality_epic::Column::AcquisitionId
                    .is_in(acquisition_ids.iter().copied()),
            )
            .order_by_desc(entity::functionality_epic::Column::CreatedAt)
            .order_by_desc(entity::functionality_epic::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        epic_id: i32,
        changes: EpicChanges,
    ) -> Result<Option<entity::functionality_epic::Model>, DbErr> {
        let Some(epic) = self.get(epic_id).await? else {
            return Ok(None);
        };

        let mut epic_am = epic.into_active_model();
        if let Some(external_id) = changes.epic_id {
            epic_am.epic_id = ActiveValue::Set(external_id);
        }
        if let Some(name) = changes.epic_name {
            epic_am.epic_name = ActiveValue::Set(name);
        }
        if let Some(status) = changes.epic_status {
            epic_am.epic_status = ActiveValue::Set(status);
        }
        if let Some(company) = changes.epic_acquired_company {
            epic_am.epic_acquired_company = ActiveValue::Set(company);
        }
        if let Some(link) = changes.epic_link {
            epic_am.epic_link = ActiveValue::Set(link);
        }
        epic_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(epic_am.update(self.db).await?))
    }

    /// Deletes an epic
    ///
    /// Returns OK regardless of the epic existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, epic_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FunctionalityEpic::delete_by_id(epic_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_acquisition(&self, acquisition_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FunctionalityEpic::delete_many()
            .filter(entity::functionality_epic::Column::AcquisitionId.eq(acquisition_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
