use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{TestContext, TestError};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the provided e-mail and a name derived from it.
    pub async fn insert_user(&self, email: &str) -> Result<entity::roadmap_user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let name = email.split('@').next().unwrap_or(email).to_string();

        let user = entity::roadmap_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(Some(name)),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(user)
    }
}
