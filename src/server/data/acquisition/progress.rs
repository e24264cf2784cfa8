use chrono::Utc;
use entity::sea_orm_active_enums::Disposition;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CreateProgressParams {
    pub acquisition_id: i32,
    pub disposition: Option<Disposition>,
    pub dev_platform: bool,
    pub functionality_epics_to_do: i32,
    pub functionality_epics_in_progress: i32,
    pub functionality_epics_complete: i32,
    pub client_count_total: i32,
    pub client_access_count: i32,
    pub client_active_count: i32,
}

/// Column changes for a progress record, `None` leaves the column untouched.
#[derive(Default)]
pub struct ProgressChanges {
    pub disposition: Option<Option<Disposition>>,
    pub dev_platform: Option<bool>,
    pub functionality_epics_to_do: Option<i32>,
    pub functionality_epics_in_progress: Option<i32>,
    pub functionality_epics_complete: Option<i32>,
    pub client_count_total: Option<i32>,
    pub client_access_count: Option<i32>,
    pub client_active_count: Option<i32>,
}

pub struct AcquisitionProgressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcquisitionProgressRepository<'a, C> {
    /// Creates a new instance of [`AcquisitionProgressRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateProgressParams,
    ) -> Result<entity::acquisition_progress::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let progress = entity::acquisition_progress::ActiveModel {
            acquisition_id: ActiveValue::Set(params.acquisition_id),
            disposition: ActiveValue::Set(params.disposition),
            dev_platform: ActiveValue::Set(params.dev_platform),
            functionality_epics_to_do: ActiveValue::Set(params.functionality_epics_to_do),
            functionality_epics_in_progress: ActiveValue::Set(
                params.functionality_epics_in_progress,
            ),
            functionality_epics_complete: ActiveValue::Set(params.functionality_epics_complete),
            client_count_total: ActiveValue::Set(params.client_count_total),
            client_access_count: ActiveValue::Set(params.client_access_count),
            client_active_count: ActiveValue::Set(params.client_active_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        progress.insert(self.db).await
    }

    pub async fn get(
        &self,
        progress_id: i32,
    ) -> Result<Option<entity::acquisition_progress::Model>, DbErr> {
        entity::prelude::AcquisitionProgress::find_by_id(progress_id)
            .one(self.db)
            .await
    }

    /// Gets progress records, newest first, optionally limited to one acquisition
    pub async fn get_all(
        &self,
        acquisition_id: Option<i32>,
    ) -> Result<Vec<entity::acquisition_progress::Model>, DbErr> {
        let mut query = entity::prelude::AcquisitionProgress::find();
        if let Some(acquisition_id) = acquisition_id {
            query = query
                .filter(entity::acquisition_progress::Column::AcquisitionId.eq(acquisition_id));
        }

        query
            .order_by_desc(entity::acquisition_progress::Column::CreatedAt)
            .order_by_desc(entity::acquisition_progress::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_acquisition(
        &self,
        acquisition_id: i32,
    ) -> Result<Option<entity::acquisition_progress::Model>, DbErr> {
        entity::prelude::AcquisitionProgress::find()
            .filter(entity::acquisition_progress::Column::AcquisitionId.eq(acquisition_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_acquisition_ids(
        &self,
        acquisition_ids: &[i32],
    ) -> Result<Vec<entity::acquisition_progress::Model>, DbErr> {
        entity::prelude::AcquisitionProgress::find()
            .filter(
                entity::acquisition_progress::Column::AcquisitionId
                    .is_in(acquisition_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        progress_id: i32,
        changes: ProgressChanges,
    ) -> Result<Option<entity::acquisition_progress::Model>, DbErr> {
        let Some(progress) = self.get(progress_id).await? else {
            return Ok(None);
        };

        let mut progress_am = progress.into_active_model();
        if let Some(disposition) = changes.disposition {
            progress_am.disposition = ActiveValue::Set(disposition);
        }
        if let Some(dev_platform) = changes.dev_platform {
            progress_am.dev_platform = ActiveValue::Set(dev_platform);
        }
        if let Some(to_do) = changes.functionality_epics_to_do {
            progress_am.functionality_epics_to_do = ActiveValue::Set(to_do);
        }
        if let Some(in_progress) = changes.functionality_epics_in_progress {
            progress_am.functionality_epics_in_progress = ActiveValue::Set(in_progress);
        }
        if let Some(complete) = changes.functionality_epics_complete {
            progress_am.functionality_epics_complete = ActiveValue::Set(complete);
        }
        if let Some(total) = changes.client_count_total {
            progress_am.client_count_total = ActiveValue::Set(total);
        }
        if let Some(access) = changes.client_access_count {
            progress_am.client_access_count = ActiveValue::Set(access);
        }
        if let Some(active) = changes.client_active_count {
            progress_am.client_active_count = ActiveValue::Set(active);
        }
        progress_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(progress_am.update(self.db).await?))
    }

    /// Deletes a progress record
    ///
    /// Returns OK regardless of the record existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, progress_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AcquisitionProgress::delete_by_id(progress_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_acquisition(&self, acquisition_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcquisitionProgress::delete_many()
            .filter(entity::acquisition_progress::Column::AcquisitionId.eq(acquisition_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
