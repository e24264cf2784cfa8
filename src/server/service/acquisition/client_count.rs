use sea_orm::DatabaseConnection;

use crate::{
    model::acquisition::{ClientCountDto, CreateClientCountDto, UpdateClientCountDto},
    server::{
        data::acquisition::{
            acquisition::AcquisitionRepository,
            client_count::{ClientCountChanges, ClientCountRepository, CreateClientCountParams},
        },
        error::{validation::ValidationError, Error},
    },
};

pub struct ClientCountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientCountService<'a> {
    /// Creates a new instance of [`ClientCountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, acquisition_id: Option<i32>) -> Result<Vec<ClientCountDto>, Error> {
        let clients = ClientCountRepository::new(self.db)
            .get_all(acquisition_id)
            .await?;

        Ok(clients.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, client_count_id: i32) -> Result<Option<ClientCountDto>, Error> {
        let client = ClientCountRepository::new(self.db)
            .get(client_count_id)
            .await?;

        Ok(client.map(Into::into))
    }

    pub async fn create(&self, payload: CreateClientCountDto) -> Result<ClientCountDto, Error> {
        let (Some(acquisition_id), Some(client_vitally_id), Some(client_name)) = (
            payload.acquisition_id,
            payload.client_vitally_id.filter(|id| !id.trim().is_empty()),
            payload.client_name.filter(|name| !name.trim().is_empty()),
        ) else {
            return Err(ValidationError::MissingRequiredFields.into());
        };

        if AcquisitionRepository::new(self.db)
            .get(acquisition_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownAcquisition(acquisition_id).into());
        }

        let client = ClientCountRepository::new(self.db)
            .create(CreateClientCountParams {
                acquisition_id,
                client_vitally_id,
                org_id: payload.org_id,
                client_name,
                active_in_console: payload.active_in_console.unwrap_or(false),
            })
            .await?;

        Ok(client.into())
    }

    pub async fn update(
        &self,
        client_count_id: i32,
        payload: UpdateClientCountDto,
    ) -> Result<Option<ClientCountDto>, Error> {
        if payload
            .client_vitally_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(ValidationError::EmptyField("clientVitallyId").into());
        }
        if payload
            .client_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(ValidationError::EmptyField("clientName").into());
        }

        let changes = ClientCountChanges {
            client_vitally_id: payload.client_vitally_id,
            org_id: payload.org_id,
            client_name: payload.client_name,
            active_in_console: payload.active_in_console,
        };

        let client = ClientCountRepository::new(self.db)
            .update(client_count_id, changes)
            .await?;

        Ok(client.map(Into::into))
    }

    pub async fn delete(&self, client_count_id: i32) -> Result<bool, Error> {
        let result = ClientCountRepository::new(self.db)
            .delete(client_count_id)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
