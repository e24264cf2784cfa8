//! Acquisition fixtures: acquisitions, projects and the per-acquisition tracking records.

use chrono::Utc;
use entity::json::RelevantLinks;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{TestContext, TestError};

impl TestContext {
    pub fn acquisition<'a>(&'a self) -> AcquisitionFixtures<'a> {
        AcquisitionFixtures { setup: self }
    }
}

pub struct AcquisitionFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AcquisitionFixtures<'a> {
    pub async fn insert_acquisition(
        &self,
        name: &str,
        color: Option<&str>,
    ) -> Result<entity::acquisition::Model, TestError> {
        let now = Utc::now().naive_utc();

        let acquisition = entity::acquisition::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            integration_overview: ActiveValue::Set(None),
            color: ActiveValue::Set(color.map(|c| c.to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(acquisition)
    }

    /// Insert a project spanning the provided milestones and link it to `acquisition_ids`.
    pub async fn insert_project(
        &self,
        title: &str,
        start_milestone_id: Option<i32>,
        end_milestone_id: Option<i32>,
        acquisition_ids: &[i32],
    ) -> Result<entity::project::Model, TestError> {
        let now = Utc::now().naive_utc();

        let project = entity::project::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(None),
            relevant_links: ActiveValue::Set(RelevantLinks::default()),
            start_milestone_id: ActiveValue::Set(start_milestone_id),
            end_milestone_id: ActiveValue::Set(end_milestone_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        for acquisition_id in acquisition_ids {
            entity::prelude::AcquisitionProject::insert(
                entity::acquisition_project::ActiveModel {
                    acquisition_id: ActiveValue::Set(*acquisition_id),
                    project_id: ActiveValue::Set(project.id),
                },
            )
            .exec_without_returning(&self.setup.db)
            .await?;
        }

        Ok(project)
    }

    /// Insert a progress record with the provided epic counters and client counters.
    pub async fn insert_progress(
        &self,
        acquisition_id: i32,
        dev_platform: bool,
        epics: (i32, i32, i32),
        clients: (i32, i32, i32),
    ) -> Result<entity::acquisition_progress::Model, TestError> {
        let now = Utc::now().naive_utc();
        let (to_do, in_progress, complete) = epics;
        let (total, access, active) = clients;

        let progress = entity::acquisition_progress::ActiveModel {
            acquisition_id: ActiveValue::Set(acquisition_id),
            disposition: ActiveValue::Set(None),
            dev_platform: ActiveValue::Set(dev_platform),
            functionality_epics_to_do: ActiveValue::Set(to_do),
            functionality_epics_in_progress: ActiveValue::Set(in_progress),
            functionality_epics_complete: ActiveValue::Set(complete),
            client_count_total: ActiveValue::Set(total),
            client_access_count: ActiveValue::Set(access),
            client_active_count: ActiveValue::Set(active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(progress)
    }

    pub async fn insert_epic(
        &self,
        acquisition_id: i32,
        epic_id: &str,
        epic_name: &str,
    ) -> Result<entity::functionality_epic::Model, TestError> {
        let now = Utc::now().naive_utc();

        let epic = entity::functionality_epic::ActiveModel {
            acquisition_id: ActiveValue::Set(acquisition_id),
            epic_id: ActiveValue::Set(epic_id.to_string()),
            epic_name: ActiveValue::Set(epic_name.to_string()),
            epic_status: ActiveValue::Set(None),
            epic_acquired_company: ActiveValue::Set(None),
            epic_link: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(epic)
    }

    pub async fn insert_client_count(
        &self,
        acquisition_id: i32,
        client_name: &str,
        active_in_console: bool,
    ) -> Result<entity::acquisition_client_count::Model, TestError> {
        let now = Utc::now().naive_utc();

        let client_count = entity::acquisition_client_count::ActiveModel {
            acquisition_id: ActiveValue::Set(acquisition_id),
            client_vitally_id: ActiveValue::Set(format!("vitally-{}", client_name.to_lowercase())),
            org_id: ActiveValue::Set(None),
            client_name: ActiveValue::Set(client_name.to_string()),
            active_in_console: ActiveValue::Set(active_in_console),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(client_count)
    }
}
