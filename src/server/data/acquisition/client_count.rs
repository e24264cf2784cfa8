use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CreateClientCountParams {
    pub acquisition_id: i32,
    pub client_vitally_id: String,
    pub org_id: Option<String>,
    pub client_name: String,
    pub active_in_console: bool,
}

/// Column changes for a client record, `None` leaves the column untouched.
#[derive(Default)]
pub struct ClientCountChanges {
    pub client_vitally_id: Option<String>,
    pub org_id: Option<Option<String>>,
    pub client_name: Option<String>,
    pub active_in_console: Option<bool>,
}

pub struct ClientCountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientCountRepository<'a, C> {
    /// Creates a new instance of [`ClientCountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateClientCountParams,
    ) -> Result<entity::acquisition_client_count::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let client_count = entity::acquisition_client_count::ActiveModel {
            acquisition_id: ActiveValue::Set(params.acquisition_id),
            client_vitally_id: ActiveValue::Set(params.client_vitally_id),
            org_id: ActiveValue::Set(params.org_id),
            client_name: ActiveValue::Set(params.client_name),
            active_in_console: ActiveValue::Set(params.active_in_console),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        client_count.insert(self.db).await
    }

    pub async fn get(
        &self,
        client_count_id: i32,
    ) -> Result<Option<entity::acquisition_client_count::Model>, DbErr> {
        entity::prelude::AcquisitionClientCount::find_by_id(client_count_id)
            .one(self.db)
            .await
    }

    /// Gets client records by client name, optionally limited to one acquisition
    pub async fn get_all(
        &self,
        acquisition_id: Option<i32>,
    ) -> Result<Vec<entity::acquisition_client_count::Model>, DbErr> {
        let mut query = entity::prelude::AcquisitionClientCount::find();
        if let Some(acquisition_id) = acquisition_id {
            query = query.filter(
                entity::acquisition_client_count::Column::AcquisitionId.eq(acquisition_id),
            );
        }

        query
            .order_by_asc(entity::acquisition_client_count::Column::ClientName)
            .order_by_asc(entity::acquisition_client_count::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_acquisition_ids(
        &self,
        acquisition_ids: &[i32],
    ) -> Result<Vec<entity::acquisition_client_count::Model>, DbErr> {
        entity::prelude::AcquisitionClientCount::find()
            .filter(
                entity::acquisition_client_count::Column::AcquisitionId
                    .is_in(acquisition_ids.iter().copied()),
            )
            .order_by_asc(entity::acquisition_client_count::Column::ClientName)
            .order_by_asc(entity::acquisition_client_count::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        client_count_id: i32,
        changes: ClientCountChanges,
    ) -> Result<Option<entity::acquisition_client_count::Model>, DbErr> {
        let Some(client_count) = self.get(client_count_id).await? else {
            return Ok(None);
        };

        let mut client_count_am = client_count.into_active_model();
        if let Some(client_vitally_id) = changes.client_vitally_id {
            client_count_am.client_vitally_id = ActiveValue::Set(client_vitally_id);
        }
        if let Some(org_id) = changes.org_id {
            client_count_am.org_id = ActiveValue::Set(org_id);
        }
        if let Some(client_name) = changes.client_name {
            client_count_am.client_name = ActiveValue::Set(client_name);
        }
        if let Some(active_in_console) = changes.active_in_console {
            client_count_am.active_in_console = ActiveValue::Set(active_in_console);
        }
        client_count_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(client_count_am.update(self.db).await?))
    }

    /// Deletes a client record
    ///
    /// Returns OK regardless of the record existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, client_count_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AcquisitionClientCount::delete_by_id(client_count_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_acquisition(&self, acquisition_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcquisitionClientCount::delete_many()
            .filter(entity::acquisition_client_count::Column::AcquisitionId.eq(acquisition_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
