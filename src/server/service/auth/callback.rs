use oauth2::{AuthorizationCode, PkceCodeVerifier, TokenResponse};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::auth::{AuthSettings, UserInfo},
    },
};

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthSettings,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthSettings) -> Self {
        Self { db, auth }
    }

    /// Completes a login
    ///
    /// Exchanges the authorization code using the PKCE verifier stored at login, fetches
    /// the provider's userinfo document and upserts the user by e-mail.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The signed in user with the role resolved from the editor allow-list
    /// - `Err(Error::OAuthTokenError)` - The provider rejected the code exchange
    /// - `Err(Error::AuthError(AuthError::MissingEmail))` - The userinfo document has no e-mail
    /// - `Err(Error)` - HTTP or database failures
    pub async fn handle_callback(&self, code: &str, pkce_verifier: String) -> Result<UserDto, Error> {
        let token = self
            .auth
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&self.auth.http_client)
            .await
            .map_err(|e| Error::OAuthTokenError(e.to_string()))?;

        let user_info: UserInfo = self
            .auth
            .http_client
            .get(&self.auth.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let email = match user_info.email {
            Some(email) if !email.trim().is_empty() => email.trim().to_lowercase(),
            _ => return Err(AuthError::MissingEmail.into()),
        };

        let user = UserRepository::new(self.db)
            .upsert_by_email(&email, user_info.name, user_info.picture)
            .await?;

        let role = self.auth.role_for(&user.email);
        tracing::debug!(user_id = %user.id, role = ?role, "Resolved role for signed in user");

        Ok(UserDto {
            id: user.id,
            email: user.email,
            name: user.name,
            role,
        })
    }
}
