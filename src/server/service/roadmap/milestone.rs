use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::roadmap::{CreateMilestoneDto, MilestoneDto, UpdateMilestoneDto},
    server::{
        data::{
            acquisition::project::ProjectRepository,
            roadmap::{item::RoadmapItemRepository, milestone::MilestoneRepository},
        },
        error::{resource::ResourceError, validation::ValidationError, Error},
        util::time::parse_date,
    },
};

pub struct MilestoneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MilestoneService<'a> {
    /// Creates a new instance of [`MilestoneService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all milestones ordered by date, oldest first
    pub async fn get_all(&self) -> Result<Vec<MilestoneDto>, Error> {
        let milestones = MilestoneRepository::new(self.db).get_all().await?;

        Ok(milestones.into_iter().map(MilestoneDto::from).collect())
    }

    pub async fn get(&self, milestone_id: i32) -> Result<Option<MilestoneDto>, Error> {
        let milestone = MilestoneRepository::new(self.db).get(milestone_id).await?;

        Ok(milestone.map(MilestoneDto::from))
    }

    pub async fn create(&self, payload: CreateMilestoneDto) -> Result<MilestoneDto, Error> {
        let title = payload.title.filter(|t| !t.trim().is_empty());
        let date = payload.date.filter(|d| !d.trim().is_empty());

        let (Some(title), Some(date)) = (title, date) else {
            return Err(ValidationError::MissingRequiredFields.into());
        };

        let date = parse_date(&date)?;
        let milestone = MilestoneRepository::new(self.db).create(title, date).await?;

        Ok(milestone.into())
    }

    /// Updates title and/or date, returning `Ok(None)` when the milestone does not exist
    pub async fn update(
        &self,
        milestone_id: i32,
        payload: UpdateMilestoneDto,
    ) -> Result<Option<MilestoneDto>, Error> {
        if payload.title.is_none() && payload.date.is_none() {
            return Err(ValidationError::EmptyUpdate.into());
        }

        if let Some(title) = &payload.title {
            if title.trim().is_empty() {
                return Err(ValidationError::EmptyField("title").into());
            }
        }

        let date = match &payload.date {
            Some(date) => Some(parse_date(date)?),
            None => None,
        };

        let milestone = MilestoneRepository::new(self.db)
            .update(milestone_id, payload.title, date)
            .await?;

        Ok(milestone.map(MilestoneDto::from))
    }

    /// Deletes a milestone no roadmap item belongs to
    ///
    /// Projects starting or ending at the milestone lose that reference.
    ///
    /// # Returns
    /// - `Ok(true)` - The milestone was deleted
    /// - `Ok(false)` - The milestone does not exist
    /// - `Err(Error::ResourceError(ResourceError::MilestoneInUse))` - Items still reference it
    pub async fn delete(&self, milestone_id: i32) -> Result<bool, Error> {
        let item_count = RoadmapItemRepository::new(self.db)
            .count_by_milestone(milestone_id)
            .await?;

        if item_count > 0 {
            return Err(ResourceError::MilestoneInUse(milestone_id).into());
        }

        let txn = self.db.begin().await?;

        ProjectRepository::new(&txn)
            .clear_milestone(milestone_id)
            .await?;
        let result = MilestoneRepository::new(&txn).delete(milestone_id).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
