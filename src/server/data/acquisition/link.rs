use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Repository for the many-to-many link between acquisitions and projects
pub struct AcquisitionProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcquisitionProjectRepository<'a, C> {
    /// Creates a new instance of [`AcquisitionProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_acquisition_ids(
        &self,
        acquisition_ids: &[i32],
    ) -> Result<Vec<entity::acquisition_project::Model>, DbErr> {
        entity::prelude::AcquisitionProject::find()
            .filter(
                entity::acquisition_project::Column::AcquisitionId
                    .is_in(acquisition_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    pub async fn get_by_project_ids(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<entity::acquisition_project::Model>, DbErr> {
        entity::prelude::AcquisitionProject::find()
            .filter(
                entity::acquisition_project::Column::ProjectId.is_in(project_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    /// Replaces the acquisitions linked to a project
    pub async fn replace_for_project(
        &self,
        project_id: i32,
        acquisition_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.delete_by_project(project_id).await?;

        let mut inserted: Vec<i32> = Vec::with_capacity(acquisition_ids.len());
        for &acquisition_id in acquisition_ids {
            if inserted.contains(&acquisition_id) {
                continue;
            }

            entity::prelude::AcquisitionProject::insert(entity::acquisition_project::ActiveModel {
                acquisition_id: ActiveValue::Set(acquisition_id),
                project_id: ActiveValue::Set(project_id),
            })
            .exec_without_returning(self.db)
            .await?;

            inserted.push(acquisition_id);
        }

        Ok(())
    }

    pub async fn delete_by_project(&self, project_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcquisitionProject::delete_many()
            .filter(entity::acquisition_project::Column::ProjectId.eq(project_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_acquisition(&self, acquisition_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcquisitionProject::delete_many()
            .filter(entity::acquisition_project::Column::AcquisitionId.eq(acquisition_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
