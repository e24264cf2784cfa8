use chrono::Utc;
use entity::json::{RelevantLink, RelevantLinks};
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CreateProjectParams {
    pub title: String,
    pub description: Option<String>,
    pub relevant_links: Vec<RelevantLink>,
    pub start_milestone_id: Option<i32>,
    pub end_milestone_id: Option<i32>,
}

/// Column changes for a project, `None` leaves the column untouched.
#[derive(Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub relevant_links: Option<Vec<RelevantLink>>,
    pub start_milestone_id: Option<Option<i32>>,
    pub end_milestone_id: Option<Option<i32>>,
}

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProjectParams) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let project = entity::project::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            relevant_links: ActiveValue::Set(RelevantLinks(params.relevant_links)),
            start_milestone_id: ActiveValue::Set(params.start_milestone_id),
            end_milestone_id: ActiveValue::Set(params.end_milestone_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn get(&self, project_id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await
    }

    /// Gets all projects, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .order_by_desc(entity::project::Column::CreatedAt)
            .order_by_desc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the requested projects, newest first
    pub async fn get_many(&self, project_ids: &[i32]) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::Id.is_in(project_ids.iter().copied()))
            .order_by_desc(entity::project::Column::CreatedAt)
            .order_by_desc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        project_id: i32,
        changes: ProjectChanges,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        let Some(project) = self.get(project_id).await? else {
            return Ok(None);
        };

        let mut project_am = project.into_active_model();
        if let Some(title) = changes.title {
            project_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            project_am.description = ActiveValue::Set(description);
        }
        if let Some(relevant_links) = changes.relevant_links {
            project_am.relevant_links = ActiveValue::Set(RelevantLinks(relevant_links));
        }
        if let Some(start_milestone_id) = changes.start_milestone_id {
            project_am.start_milestone_id = ActiveValue::Set(start_milestone_id);
        }
        if let Some(end_milestone_id) = changes.end_milestone_id {
            project_am.end_milestone_id = ActiveValue::Set(end_milestone_id);
        }
        project_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(project_am.update(self.db).await?))
    }

    /// Deletes a project
    ///
    /// Returns OK regardless of the project existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, project_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Project::delete_by_id(project_id)
            .exec(self.db)
            .await
    }

    /// Clears start and end references to a milestone that is about to be removed
    pub async fn clear_milestone(&self, milestone_id: i32) -> Result<(), DbErr> {
        entity::prelude::Project::update_many()
            .col_expr(
                entity::project::Column::StartMilestoneId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::project::Column::StartMilestoneId.eq(milestone_id))
            .exec(self.db)
            .await?;

        entity::prelude::Project::update_many()
            .col_expr(
                entity::project::Column::EndMilestoneId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::project::Column::EndMilestoneId.eq(milestone_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
