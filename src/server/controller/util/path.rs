use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::{validation::ValidationError, Error};

/// Unwraps a numeric path id so a malformed id becomes a 400 with the usual error shape.
pub fn parse_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, Error> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(ValidationError::InvalidPath(rejection.body_text()).into()),
    }
}
