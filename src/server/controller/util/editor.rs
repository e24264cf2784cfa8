use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::session::user::SessionUser,
    },
};

/// Returns the session user when they hold the editor role.
///
/// # Returns
/// - `Ok(UserDto)` - Editor found in session
/// - `Err(Error::AuthError(AuthError::Forbidden))` - No user in session, or a viewer
pub async fn require_editor(session: &Session) -> Result<UserDto, Error> {
    match SessionUser::get(session).await? {
        Some(user) if user.is_editor() => Ok(user),
        Some(user) => {
            tracing::debug!(user_id = %user.id, "Viewer attempted a mutation");

            Err(AuthError::Forbidden.into())
        }
        None => Err(AuthError::Forbidden.into()),
    }
}
