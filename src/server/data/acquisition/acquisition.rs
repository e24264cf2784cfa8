use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Column changes for an acquisition, `None` leaves the column untouched.
#[derive(Default)]
pub struct AcquisitionChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub integration_overview: Option<Option<String>>,
    pub color: Option<Option<String>>,
}

pub struct AcquisitionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcquisitionRepository<'a, C> {
    /// Creates a new instance of [`AcquisitionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
        integration_overview: Option<String>,
        color: Option<String>,
    ) -> Result<entity::acquisition::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let acquisition = entity::acquisition::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            integration_overview: ActiveValue::Set(integration_overview),
            color: ActiveValue::Set(color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        acquisition.insert(self.db).await
    }

    pub async fn get(&self, acquisition_id: i32) -> Result<Option<entity::acquisition::Model>, DbErr> {
        entity::prelude::Acquisition::find_by_id(acquisition_id)
            .one(self.db)
            .await
    }

    /// Gets all acquisitions, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::acquisition::Model>, DbErr> {
        entity::prelude::Acquisition::find()
            .order_by_desc(entity::acquisition::Column::CreatedAt)
            .order_by_desc(entity::acquisition::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        acquisition_ids: &[i32],
    ) -> Result<Vec<entity::acquisition::Model>, DbErr> {
        entity::prelude::Acquisition::find()
            .filter(entity::acquisition::Column::Id.is_in(acquisition_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Returns the subset of `acquisition_ids` that exist
    pub async fn find_existing_ids(&self, acquisition_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if acquisition_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Acquisition::find()
            .select_only()
            .column(entity::acquisition::Column::Id)
            .filter(entity::acquisition::Column::Id.is_in(acquisition_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        acquisition_id: i32,
        changes: AcquisitionChanges,
    ) -> Result<Option<entity::acquisition::Model>, DbErr> {
        let Some(acquisition) = self.get(acquisition_id).await? else {
            return Ok(None);
        };

        let mut acquisition_am = acquisition.into_active_model();
        if let Some(name) = changes.name {
            acquisition_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            acquisition_am.description = ActiveValue::Set(description);
        }
        if let Some(integration_overview) = changes.integration_overview {
            acquisition_am.integration_overview = ActiveValue::Set(integration_overview);
        }
        if let Some(color) = changes.color {
            acquisition_am.color = ActiveValue::Set(color);
        }
        acquisition_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(acquisition_am.update(self.db).await?))
    }

    /// Deletes an acquisition
    ///
    /// Returns OK regardless of the acquisition existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, acquisition_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Acquisition::delete_by_id(acquisition_id)
            .exec(self.db)
            .await
    }
}
