use sea_orm::DatabaseConnection;

use crate::{
    model::acquisition::{
        CreateFunctionalityEpicDto, FunctionalityEpicDto, UpdateFunctionalityEpicDto,
    },
    server::{
        data::acquisition::{
            acquisition::AcquisitionRepository,
            epic::{CreateEpicParams, EpicChanges, FunctionalityEpicRepository},
        },
        error::{validation::ValidationError, Error},
    },
};

pub struct FunctionalityEpicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FunctionalityEpicService<'a> {
    /// Creates a new instance of [`FunctionalityEpicService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        acquisition_id: Option<i32>,
    ) -> Result<Vec<FunctionalityEpicDto>, Error> {
        let epics = FunctionalityEpicRepository::new(self.db)
            .get_all(acquisition_id)
            .await?;

        Ok(epics.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, epic_id: i32) -> Result<Option<FunctionalityEpicDto>, Error> {
        let epic = FunctionalityEpicRepository::new(self.db).get(epic_id).await?;

        Ok(epic.map(Into::into))
    }

    pub async fn create(
        &self,
        payload: CreateFunctionalityEpicDto,
    ) -> Result<FunctionalityEpicDto, Error> {
        let (Some(acquisition_id), Some(epic_id), Some(epic_name)) = (
            payload.acquisition_id,
            payload.epic_id.filter(|id| !id.trim().is_empty()),
            payload.epic_name.filter(|name| !name.trim().is_empty()),
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

        let epic = FunctionalityEpicRepository::new(self.db)
            .create(CreateEpicParams {
                acquisition_id,
                epic_id,
                epic_name,
                epic_status: payload.epic_status,
                epic_acquired_company: payload.epic_acquired_company,
                epic_link: payload.epic_link,
            })
            .await?;

        Ok(epic.into())
    }

    pub async fn update(
        &self,
        epic_id: i32,
        payload: UpdateFunctionalityEpicDto,
    ) -> Result<Option<FunctionalityEpicDto>, Error> {
        if payload.epic_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(ValidationError::EmptyField("epicId").into());
        }
        if payload
            .epic_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(ValidationError::EmptyField("epicName").into());
        }

        let changes = EpicChanges {
            epic_id: payload.epic_id,
            epic_name: payload.epic_name,
            epic_status: payload.epic_status,
            epic_acquired_company: payload.epic_acquired_company,
            epic_link: payload.epic_link,
        };

        let epic = FunctionalityEpicRepository::new(self.db)
            .update(epic_id, changes)
            .await?;

        Ok(epic.map(Into::into))
    }

    pub async fn delete(&self, epic_id: i32) -> Result<bool, Error> {
        let result = FunctionalityEpicRepository::new(self.db)
            .delete(epic_id)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
