use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user or refreshes the profile fields of the user with the same e-mail
    pub async fn upsert_by_email(
        &self,
        email: &str,
        name: Option<String>,
        image: Option<String>,
    ) -> Result<entity::roadmap_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::roadmap_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name),
            image: ActiveValue::Set(image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::RoadmapUser::insert_many([user])
            .on_conflict(
                OnConflict::column(entity::roadmap_user::Column::Email)
                    .update_columns([
                        entity::roadmap_user::Column::Name,
                        entity::roadmap_user::Column::Image,
                        entity::roadmap_user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?
            .into_iter()
            .next()
            .ok_or(DbErr::RecordNotInserted)
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::roadmap_user::Model>, DbErr> {
        entity::prelude::RoadmapUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<entity::roadmap_user::Model>, DbErr> {
        entity::prelude::RoadmapUser::find()
            .filter(entity::roadmap_user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
