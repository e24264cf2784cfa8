use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        acquisition::{
            AcquisitionRefDto, CreateProjectDto, ProjectDto, ProjectSummaryDto, UpdateProjectDto,
        },
        roadmap::MilestoneDto,
    },
    server::{
        data::{
            acquisition::{
                acquisition::AcquisitionRepository,
                link::AcquisitionProjectRepository,
                project::{CreateProjectParams, ProjectChanges, ProjectRepository},
            },
            roadmap::milestone::MilestoneRepository,
        },
        error::{validation::ValidationError, Error},
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    /// Creates a new instance of [`ProjectService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all projects, newest first, with milestones and linked acquisitions
    pub async fn get_all(&self) -> Result<Vec<ProjectDto>, Error> {
        let projects = ProjectRepository::new(self.db).get_all().await?;

        Ok(assemble_projects(self.db, projects).await?)
    }

    pub async fn get(&self, project_id: i32) -> Result<Option<ProjectDto>, Error> {
        let Some(project) = ProjectRepository::new(self.db).get(project_id).await? else {
            return Ok(None);
        };

        Ok(assemble_projects(self.db, vec![project])
            .await?
            .into_iter()
            .next())
    }

    /// Creates a project linked to at least one acquisition
    ///
    /// # Returns
    /// - `Ok(ProjectDto)` - The created project
    /// - `Err(Error::ValidationError)` - Missing title, no acquisitions, or an unknown
    ///   acquisition or milestone id
    pub async fn create(&self, payload: CreateProjectDto) -> Result<ProjectDto, Error> {
        let Some(title) = payload.title.filter(|t| !t.trim().is_empty()) else {
            return Err(ValidationError::MissingField("title").into());
        };

        let acquisition_ids = payload.acquisition_ids.unwrap_or_default();
        self.ensure_acquisitions(&acquisition_ids).await?;

        let milestone_ids: Vec<i32> = [payload.start_milestone_id, payload.end_milestone_id]
            .into_iter()
            .flatten()
            .collect();
        self.ensure_milestones(&milestone_ids).await?;

        let txn = self.db.begin().await?;

        let project = ProjectRepository::new(&txn)
            .create(CreateProjectParams {
                title,
                description: payload.description,
                relevant_links: payload
                    .relevant_links
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect(),
                start_milestone_id: payload.start_milestone_id,
                end_milestone_id: payload.end_milestone_id,
            })
            .await?;

        AcquisitionProjectRepository::new(&txn)
            .replace_for_project(project.id, &acquisition_ids)
            .await?;

        txn.commit().await?;

        let project_id = project.id;
        assemble_projects(self.db, vec![project])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbErr::RecordNotFound(format!("project {}", project_id)).into())
    }

    /// Applies the keys present in `payload`, `acquisitionIds` replacing the links
    ///
    /// Returns `Ok(None)` when the project does not exist.
    pub async fn update(
        &self,
        project_id: i32,
        payload: UpdateProjectDto,
    ) -> Result<Option<ProjectDto>, Error> {
        if ProjectRepository::new(self.db)
            .get(project_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        if let Some(title) = &payload.title {
            if title.trim().is_empty() {
                return Err(ValidationError::EmptyField("title").into());
            }
        }

        if let Some(acquisition_ids) = &payload.acquisition_ids {
            self.ensure_acquisitions(acquisition_ids).await?;
        }

        let milestone_ids: Vec<i32> = [payload.start_milestone_id, payload.end_milestone_id]
            .into_iter()
            .flatten()
            .flatten()
            .collect();
        self.ensure_milestones(&milestone_ids).await?;

        let changes = ProjectChanges {
            title: payload.title,
            description: payload.description,
            relevant_links: payload
                .relevant_links
                .map(|links| links.unwrap_or_default().into_iter().map(Into::into).collect()),
            start_milestone_id: payload.start_milestone_id,
            end_milestone_id: payload.end_milestone_id,
        };

        let txn = self.db.begin().await?;

        let Some(project) = ProjectRepository::new(&txn)
            .update(project_id, changes)
            .await?
        else {
            return Ok(None);
        };

        if let Some(acquisition_ids) = &payload.acquisition_ids {
            AcquisitionProjectRepository::new(&txn)
                .replace_for_project(project.id, acquisition_ids)
                .await?;
        }

        txn.commit().await?;

        Ok(assemble_projects(self.db, vec![project])
            .await?
            .into_iter()
            .next())
    }

    /// Deletes the project and its acquisition links
    ///
    /// Returns `Ok(false)` when the project does not exist.
    pub async fn delete(&self, project_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        AcquisitionProjectRepository::new(&txn)
            .delete_by_project(project_id)
            .await?;
        let result = ProjectRepository::new(&txn).delete(project_id).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn ensure_acquisitions(&self, acquisition_ids: &[i32]) -> Result<(), Error> {
        if acquisition_ids.is_empty() {
            return Err(ValidationError::NoAcquisitions.into());
        }

        let existing = AcquisitionRepository::new(self.db)
            .find_existing_ids(acquisition_ids)
            .await?;

        let mut missing: Vec<i32> = acquisition_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        missing.sort_unstable();
        missing.dedup();

        Err(ValidationError::UnknownAcquisitions(missing).into())
    }

    async fn ensure_milestones(&self, milestone_ids: &[i32]) -> Result<(), Error> {
        if milestone_ids.is_empty() {
            return Ok(());
        }

        let found = MilestoneRepository::new(self.db)
            .get_many(milestone_ids)
            .await?;

        match milestone_ids
            .iter()
            .find(|id| !found.iter().any(|m| m.id == **id))
        {
            Some(id) => Err(ValidationError::UnknownMilestone(*id).into()),
            None => Ok(()),
        }
    }
}

/// Builds project summaries with their start and end milestones resolved
pub async fn summarize_projects<C: ConnectionTrait>(
    db: &C,
    projects: Vec<entity::project::Model>,
) -> Result<Vec<ProjectSummaryDto>, DbErr> {
    let mut milestone_ids: Vec<i32> = projects
        .iter()
        .flat_map(|p| [p.start_milestone_id, p.end_milestone_id])
        .flatten()
        .collect();
    milestone_ids.sort_unstable();
    milestone_ids.dedup();

    let milestones: HashMap<i32, MilestoneDto> = if milestone_ids.is_empty() {
        HashMap::new()
    } else {
        MilestoneRepository::new(db)
            .get_many(&milestone_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, MilestoneDto::from(m)))
            .collect()
    };

    Ok(projects
        .into_iter()
        .map(|project| ProjectSummaryDto {
            id: project.id,
            title: project.title,
            description: project.description,
            relevant_links: project
                .relevant_links
                .0
                .into_iter()
                .map(Into::into)
                .collect(),
            start_milestone_id: project.start_milestone_id,
            end_milestone_id: project.end_milestone_id,
            start_milestone: project
                .start_milestone_id
                .and_then(|id| milestones.get(&id).cloned()),
            end_milestone: project
                .end_milestone_id
                .and_then(|id| milestones.get(&id).cloned()),
            created_at: project.created_at,
            updated_at: project.updated_at,
        })
        .collect())
}

/// Builds project DTOs with milestones and linked acquisitions, keeping the input order
pub async fn assemble_projects<C: ConnectionTrait>(
    db: &C,
    projects: Vec<entity::project::Model>,
) -> Result<Vec<ProjectDto>, DbErr> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    let project_ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    let links = AcquisitionProjectRepository::new(db)
        .get_by_project_ids(&project_ids)
        .await?;

    let mut acquisition_ids: Vec<i32> = links.iter().map(|l| l.acquisition_id).collect();
    acquisition_ids.sort_unstable();
    acquisition_ids.dedup();
    let acquisitions: HashMap<i32, AcquisitionRefDto> = AcquisitionRepository::new(db)
        .get_many(&acquisition_ids)
        .await?
        .into_iter()
        .map(|a| (a.id, AcquisitionRefDto::from(a)))
        .collect();

    let mut linked: HashMap<i32, Vec<AcquisitionRefDto>> = HashMap::new();
    for link in links {
        if let Some(acquisition) = acquisitions.get(&link.acquisition_id) {
            linked
                .entry(link.project_id)
                .or_default()
                .push(acquisition.clone());
        }
    }

    Ok(summarize_projects(db, projects)
        .await?
        .into_iter()
        .map(|project| {
            let mut acquisitions = linked.remove(&project.id).unwrap_or_default();
            acquisitions.sort_by_key(|a| a.id);

            ProjectDto {
                project,
                acquisitions,
            }
        })
        .collect())
}
