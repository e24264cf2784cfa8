use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::{validation::ValidationError, Error};

/// Unwraps a JSON body extracted as a `Result` so malformed bodies become a 400 with the
/// usual error shape.
///
/// Handlers take the body as `Result<Json<T>, JsonRejection>` so the editor guard runs
/// before the body is inspected.
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(ValidationError::InvalidBody(rejection.body_text()).into()),
    }
}
