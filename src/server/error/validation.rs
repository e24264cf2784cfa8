use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request input rejected before it reaches the database. Always a 400.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),
    #[error("Invalid milestone ID: {0}")]
    UnknownMilestone(i32),
    #[error("Invalid related item IDs: {0:?}")]
    UnknownRelatedItems(Vec<i32>),
    #[error("Invalid acquisition ID: {0}")]
    UnknownAcquisition(i32),
    #[error("Invalid acquisition IDs: {0:?}")]
    UnknownAcquisitions(Vec<i32>),
    #[error("At least one acquisition ID is required")]
    NoAcquisitions,
    #[error("Acquisition {0} already has a progress record")]
    ProgressExists(i32),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{0} must not be negative")]
    NegativeCounter(&'static str),
    #[error("No meaningful fields provided for update")]
    EmptyUpdate,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
