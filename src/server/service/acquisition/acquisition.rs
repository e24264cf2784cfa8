use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::acquisition::{
        AcquisitionDto, AcquisitionProgressDto, ClientCountDto, CreateAcquisitionDto,
        FunctionalityEpicDto, ProjectSummaryDto, UpdateAcquisitionDto,
    },
    server::{
        data::acquisition::{
            acquisition::{AcquisitionChanges, AcquisitionRepository},
            client_count::ClientCountRepository,
            epic::FunctionalityEpicRepository,
            link::AcquisitionProjectRepository,
            progress::AcquisitionProgressRepository,
            project::ProjectRepository,
        },
        error::{validation::ValidationError, Error},
        service::acquisition::project::summarize_projects,
    },
};

pub struct AcquisitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcquisitionService<'a> {
    /// Creates a new instance of [`AcquisitionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all acquisitions, newest first, with projects and tracking records
    pub async fn get_all(&self) -> Result<Vec<AcquisitionDto>, Error> {
        let acquisitions = AcquisitionRepository::new(self.db).get_all().await?;

        Ok(assemble_acquisitions(self.db, acquisitions).await?)
    }

    pub async fn get(&self, acquisition_id: i32) -> Result<Option<AcquisitionDto>, Error> {
        let Some(acquisition) = AcquisitionRepository::new(self.db)
            .get(acquisition_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(assemble_acquisitions(self.db, vec![acquisition])
            .await?
            .into_iter()
            .next())
    }

    pub async fn create(&self, payload: CreateAcquisitionDto) -> Result<AcquisitionDto, Error> {
        let Some(name) = payload.name.filter(|n| !n.trim().is_empty()) else {
            return Err(ValidationError::MissingField("name").into());
        };

        let acquisition = AcquisitionRepository::new(self.db)
            .create(
                name,
                payload.description,
                payload.integration_overview,
                payload.color,
            )
            .await?;

        tracing::debug!(acquisition_id = %acquisition.id, "Created acquisition");

        Ok(AcquisitionDto::from_parts(
            acquisition,
            Vec::new(),
            None,
            Vec::new(),
            Vec::new(),
        ))
    }

    /// Applies the keys present in `payload` among name, description, integration overview
    /// and color
    ///
    /// Returns `Ok(None)` when the acquisition does not exist.
    pub async fn update(
        &self,
        acquisition_id: i32,
        payload: UpdateAcquisitionDto,
    ) -> Result<Option<AcquisitionDto>, Error> {
        if let Some(name) = &payload.name {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyField("name").into());
            }
        }

        let changes = AcquisitionChanges {
            name: payload.name,
            description: payload.description,
            integration_overview: payload.integration_overview,
            color: payload.color,
        };

        let Some(acquisition) = AcquisitionRepository::new(self.db)
            .update(acquisition_id, changes)
            .await?
        else {
            return Ok(None);
        };

        Ok(assemble_acquisitions(self.db, vec![acquisition])
            .await?
            .into_iter()
            .next())
    }

    /// Deletes the acquisition together with its progress, epics, client records and
    /// project links
    ///
    /// Returns `Ok(false)` when the acquisition does not exist.
    pub async fn delete(&self, acquisition_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        AcquisitionProgressRepository::new(&txn)
            .delete_by_acquisition(acquisition_id)
            .await?;
        FunctionalityEpicRepository::new(&txn)
            .delete_by_acquisition(acquisition_id)
            .await?;
        ClientCountRepository::new(&txn)
            .delete_by_acquisition(acquisition_id)
            .await?;
        AcquisitionProjectRepository::new(&txn)
            .delete_by_acquisition(acquisition_id)
            .await?;
        let result = AcquisitionRepository::new(&txn)
            .delete(acquisition_id)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

impl AcquisitionDto {
    fn from_parts(
        acquisition: entity::acquisition::Model,
        projects: Vec<ProjectSummaryDto>,
        progress: Option<AcquisitionProgressDto>,
        epics: Vec<FunctionalityEpicDto>,
        client_counts: Vec<ClientCountDto>,
    ) -> Self {
        Self {
            id: acquisition.id,
            name: acquisition.name,
            description: acquisition.description,
            integration_overview: acquisition.integration_overview,
            color: acquisition.color,
            projects,
            progress,
            epics,
            client_counts,
            created_at: acquisition.created_at,
            updated_at: acquisition.updated_at,
        }
    }
}

/// Resolves projects, progress, epics and client records for `acquisitions`, keeping
/// their order
pub async fn assemble_acquisitions<C: ConnectionTrait>(
    db: &C,
    acquisitions: Vec<entity::acquisition::Model>,
) -> Result<Vec<AcquisitionDto>, DbErr> {
    if acquisitions.is_empty() {
        return Ok(Vec::new());
    }

    let acquisition_ids: Vec<i32> = acquisitions.iter().map(|a| a.id).collect();

    let links = AcquisitionProjectRepository::new(db)
        .get_by_acquisition_ids(&acquisition_ids)
        .await?;
    let mut project_ids: Vec<i32> = links.iter().map(|l| l.project_id).collect();
    project_ids.sort_unstable();
    project_ids.dedup();

    let projects = if project_ids.is_empty() {
        Vec::new()
    } else {
        ProjectRepository::new(db).get_many(&project_ids).await?
    };
    let projects: HashMap<i32, ProjectSummaryDto> = summarize_projects(db, projects)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let mut projects_by_acquisition: HashMap<i32, Vec<ProjectSummaryDto>> = HashMap::new();
    for link in &links {
        if let Some(project) = projects.get(&link.project_id) {
            projects_by_acquisition
                .entry(link.acquisition_id)
                .or_default()
                .push(project.clone());
        }
    }

    let mut progress: HashMap<i32, AcquisitionProgressDto> =
        AcquisitionProgressRepository::new(db)
            .get_by_acquisition_ids(&acquisition_ids)
            .await?
            .into_iter()
            .map(|p| (p.acquisition_id, AcquisitionProgressDto::from(p)))
            .collect();

    let mut epics: HashMap<i32, Vec<FunctionalityEpicDto>> = HashMap::new();
    for epic in FunctionalityEpicRepository::new(db)
        .get_by_acquisition_ids(&acquisition_ids)
        .await?
    {
        epics
            .entry(epic.acquisition_id)
            .or_default()
            .push(epic.into());
    }

    let mut client_counts: HashMap<i32, Vec<ClientCountDto>> = HashMap::new();
    for client in ClientCountRepository::new(db)
        .get_by_acquisition_ids(&acquisition_ids)
        .await?
    {
        client_counts
            .entry(client.acquisition_id)
            .or_default()
            .push(client.into());
    }

    Ok(acquisitions
        .into_iter()
        .map(|acquisition| {
            let id = acquisition.id;
            let mut acquisition_projects = projects_by_acquisition.remove(&id).unwrap_or_default();
            acquisition_projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

            AcquisitionDto::from_parts(
                acquisition,
                acquisition_projects,
                progress.remove(&id),
                epics.remove(&id).unwrap_or_default(),
                client_counts.remove(&id).unwrap_or_default(),
            )
        })
        .collect())
}
