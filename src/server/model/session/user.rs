use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::user::UserDto, server::error::Error};

pub const SESSION_USER_KEY: &str = "compass:user";

/// The logged in user, including the role computed at login.
#[derive(Deserialize, Serialize, Debug)]
pub struct SessionUser(pub UserDto);

impl SessionUser {
    /// Insert user into session
    pub async fn insert(session: &Session, user: &UserDto) -> Result<(), Error> {
        session
            .insert(SESSION_USER_KEY, SessionUser(user.clone()))
            .await?;

        Ok(())
    }

    /// Get user from session
    pub async fn get(session: &Session) -> Result<Option<UserDto>, Error> {
        Ok(session
            .get::<SessionUser>(SESSION_USER_KEY)
            .await?
            .map(|SessionUser(user)| user))
    }
}
