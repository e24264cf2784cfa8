//! Login flow session state.
//!
//! Login stores a random CSRF state and the PKCE verifier; the callback removes both so
//! each value can be used at most once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "compass:auth:csrf";
pub const SESSION_AUTH_PKCE_KEY: &str = "compass:auth:pkce";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Inserts the CSRF state token into the session.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the CSRF state without removing it.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state found
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF state in session
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Removes and returns the CSRF state.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state found and removed
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF state in session
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthPkce(pub String);

impl SessionAuthPkce {
    pub async fn insert(session: &Session, verifier: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_PKCE_KEY, SessionAuthPkce(verifier.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the PKCE verifier, erroring when login never stored one.
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthPkce>(SESSION_AUTH_PKCE_KEY)
            .await?
        {
            Some(SessionAuthPkce(verifier)) => Ok(verifier),
            None => Err(AuthError::PkceMissingValue.into()),
        }
    }
}
