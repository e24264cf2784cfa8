use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::Error, model::app::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Reports whether the database is reachable
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    state.db.ping().await?;

    Ok(Json(HealthDto {
        status: "ok".to_string(),
    }))
}
