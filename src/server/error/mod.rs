//! Error types for the Compass server.
//!
//! Each domain has its own `thiserror` enum with an `IntoResponse` mapping; they are
//! aggregated into [`Error`] so handlers and services can propagate with `?`. Anything
//! without a dedicated mapping becomes a logged 500 through [`InternalServerError`].

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the Compass server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (role checks, session, CSRF and PKCE state)
/// - Validation errors (request bodies and referenced ids)
/// - Resource errors (missing records, blocked deletes)
/// - External library errors (database, sessions, OAuth provider, HTTP client)
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Failed to parse a value read back from session or configuration.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// The OAuth provider rejected the authorization code exchange.
    #[error("Failed to exchange authorization code: {0}")]
    OAuthTokenError(String),
    #[error(transparent)]
    OAuthUrlError(#[from] oauth2::url::ParseError),
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - validation failures, CSRF mismatch, blocked deletes
/// - 403 Forbidden - mutation without an editor session
/// - 404 Not Found - missing records, no user in session
/// - 500 Internal Server Error - everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged; the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
