use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        roadmap::{RoadmapExportDto, RoadmapViewDto, RoadmapViewParams},
    },
    server::{
        controller::roadmap::ROADMAP_TAG,
        error::Error,
        model::app::AppState,
        service::roadmap::{export::export_service, view::RoadmapViewService},
    },
};

/// Items and milestones to display for the given sort, history, filter and focus options
///
/// # Responses
/// - 200 (Success): The derived view
/// - 400 (Bad Request): Unknown category name
#[utoipa::path(
    get,
    path = "/api/roadmap/view",
    tag = ROADMAP_TAG,
    params(RoadmapViewParams),
    responses(
        (status = 200, description = "Derived roadmap view", body = RoadmapViewDto),
        (status = 400, description = "Invalid category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_view(
    State(state): State<AppState>,
    Query(params): Query<RoadmapViewParams>,
) -> Result<impl IntoResponse, Error> {
    let view = RoadmapViewService::new(&state.db).view(params).await?;

    Ok(Json(view))
}

/// Every roadmap item ordered by milestone date, for offline backups
#[utoipa::path(
    get,
    path = "/api/roadmap/export",
    tag = ROADMAP_TAG,
    responses(
        (status = 200, description = "Exported roadmap", body = RoadmapExportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let export = export_service(&state.db).await?;

    Ok(Json(export))
}
