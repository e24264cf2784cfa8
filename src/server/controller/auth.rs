use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::csrf::validate_csrf,
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            session::{
                auth::{SessionAuthCsrf, SessionAuthPkce},
                user::SessionUser,
            },
        },
        service::auth::{callback::CallbackService, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with the OAuth provider
///
/// Creates the provider's authorization URL, stores the CSRF state and PKCE verifier in
/// session and redirects the user to that URL.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to the provider's login page
/// - 500 (Internal Server Error): Failed to write to session
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the OAuth provider login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.auth.oauth_client);

    SessionAuthCsrf::insert(&session, &login.state).await?;
    SessionAuthPkce::insert(&session, &login.pkce_verifier).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the provider redirects to after a successful login
///
/// Exchanges the authorization code, resolves the user's e-mail and role and stores the
/// user in session.
///
/// # Responses
/// - 307 (Temporary Redirect): Successful login, redirect to the application root
/// - 400 (Bad Request): CSRF state mismatch or a profile without an e-mail
/// - 500 (Internal Server Error): Token exchange, userinfo request or database error
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Login complete, redirect to the application root"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let callback_service = CallbackService::new(&state.db, &state.auth);

    validate_csrf(&session, &params.0.state).await?;

    let pkce_verifier = SessionAuthPkce::remove(&session).await?;

    let user = callback_service
        .handle_callback(&params.0.code, pkce_verifier)
        .await?;

    SessionUser::insert(&session, &user).await?;

    Ok(Redirect::temporary("/"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Redirect to the application root
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the application root"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user = SessionUser::get(&session).await?;

    // Clearing a session that was never persisted errors in the store
    if maybe_user.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Returns the user stored in session, including their role
///
/// # Responses
/// - 200 (Success): The logged in user
/// - 404 (Not Found): No user in session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, Error> {
    let Some(user) = SessionUser::get(&session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    Ok(Json(user))
}
