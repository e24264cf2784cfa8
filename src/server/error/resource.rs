use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ResourceError {
    /// Record with the requested id does not exist, holds the resource name.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Cannot delete milestone with associated roadmap items.")]
    MilestoneInUse(i32),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MilestoneInUse(milestone_id) => {
                tracing::debug!(milestone_id = %milestone_id, "Blocked delete of referenced milestone");

                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
