use sea_orm::DatabaseConnection;

use crate::{
    model::acquisition::{
        AcquisitionProgressDto, CreateAcquisitionProgressDto, UpdateAcquisitionProgressDto,
    },
    server::{
        data::acquisition::{
            acquisition::AcquisitionRepository,
            progress::{AcquisitionProgressRepository, CreateProgressParams, ProgressChanges},
        },
        error::{validation::ValidationError, Error},
    },
};

pub struct AcquisitionProgressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcquisitionProgressService<'a> {
    /// Creates a new instance of [`AcquisitionProgressService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        acquisition_id: Option<i32>,
    ) -> Result<Vec<AcquisitionProgressDto>, Error> {
        let progress = AcquisitionProgressRepository::new(self.db)
            .get_all(acquisition_id)
            .await?;

        Ok(progress.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, progress_id: i32) -> Result<Option<AcquisitionProgressDto>, Error> {
        let progress = AcquisitionProgressRepository::new(self.db)
            .get(progress_id)
            .await?;

        Ok(progress.map(Into::into))
    }

    /// Creates the progress record of an acquisition, counters default to 0
    ///
    /// # Returns
    /// - `Ok(AcquisitionProgressDto)` - The created record
    /// - `Err(Error::ValidationError)` - The acquisition id is missing or unknown, or the
    ///   acquisition already has a progress record
    pub async fn create(
        &self,
        payload: CreateAcquisitionProgressDto,
    ) -> Result<AcquisitionProgressDto, Error> {
        let Some(acquisition_id) = payload.acquisition_id else {
            return Err(ValidationError::MissingField("acquisitionId").into());
        };

        ensure_non_negative([
            ("functionalityEpicsToDo", payload.functionality_epics_to_do),
            ("functionalityEpicsInProgress", payload.functionality_epics_in_progress),
            ("functionalityEpicsComplete", payload.functionality_epics_complete),
            ("clientCountTotal", payload.client_count_total),
            ("clientAccessCount", payload.client_access_count),
            ("clientActiveCount", payload.client_active_count),
        ])?;

        if AcquisitionRepository::new(self.db)
            .get(acquisition_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownAcquisition(acquisition_id).into());
        }

        let progress_repo = AcquisitionProgressRepository::new(self.db);
        if progress_repo
            .get_by_acquisition(acquisition_id)
            .await?
            .is_some()
        {
            return Err(ValidationError::ProgressExists(acquisition_id).into());
        }

        let progress = progress_repo
            .create(CreateProgressParams {
                acquisition_id,
                disposition: payload.disposition.map(Into::into),
                dev_platform: payload.dev_platform.unwrap_or(false),
                functionality_epics_to_do: payload.functionality_epics_to_do.unwrap_or(0),
                functionality_epics_in_progress: payload
                    .functionality_epics_in_progress
                    .unwrap_or(0),
                functionality_epics_complete: payload.functionality_epics_complete.unwrap_or(0),
                client_count_total: payload.client_count_total.unwrap_or(0),
                client_access_count: payload.client_access_count.unwrap_or(0),
                client_active_count: payload.client_active_count.unwrap_or(0),
            })
            .await?;

        Ok(progress.into())
    }

    pub async fn update(
        &self,
        progress_id: i32,
        payload: UpdateAcquisitionProgressDto,
    ) -> Result<Option<AcquisitionProgressDto>, Error> {
        ensure_non_negative([
            ("functionalityEpicsToDo", payload.functionality_epics_to_do),
            ("functionalityEpicsInProgress", payload.functionality_epics_in_progress),
            ("functionalityEpicsComplete", payload.functionality_epics_complete),
            ("clientCountTotal", payload.client_count_total),
            ("clientAccessCount", payload.client_access_count),
            ("clientActiveCount", payload.client_active_count),
        ])?;

        let changes = ProgressChanges {
            disposition: payload.disposition.map(|d| d.map(Into::into)),
            dev_platform: payload.dev_platform,
            functionality_epics_to_do: payload.functionality_epics_to_do,
            functionality_epics_in_progress: payload.functionality_epics_in_progress,
            functionality_epics_complete: payload.functionality_epics_complete,
            client_count_total: payload.client_count_total,
            client_access_count: payload.client_access_count,
            client_active_count: payload.client_active_count,
        };

        let progress = AcquisitionProgressRepository::new(self.db)
            .update(progress_id, changes)
            .await?;

        Ok(progress.map(Into::into))
    }

    pub async fn delete(&self, progress_id: i32) -> Result<bool, Error> {
        let result = AcquisitionProgressRepository::new(self.db)
            .delete(progress_id)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Rejects the first provided counter below zero
fn ensure_non_negative<const N: usize>(
    counters: [(&'static str, Option<i32>); N],
) -> Result<(), Error> {
    match counters
        .into_iter()
        .find(|(_, value)| value.is_some_and(|v| v < 0))
    {
        Some((field, _)) => Err(ValidationError::NegativeCounter(field).into()),
        None => Ok(()),
    }
}
