use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        roadmap::{CreateMilestoneDto, MilestoneDto, UpdateMilestoneDto},
    },
    server::{
        controller::{
            roadmap::ROADMAP_TAG,
            util::{editor::require_editor, json::parse_body, path::parse_id},
        },
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::roadmap::milestone::MilestoneService,
    },
};

/// List milestones by date, earliest first
#[utoipa::path(
    get,
    path = "/api/roadmap/milestones",
    tag = ROADMAP_TAG,
    responses(
        (status = 200, description = "All milestones", body = Vec<MilestoneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_milestones(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let milestones = MilestoneService::new(&state.db).get_all().await?;

    Ok(Json(milestones))
}

#[utoipa::path(
    get,
    path = "/api/roadmap/milestones/{id}",
    tag = ROADMAP_TAG,
    params(("id" = i32, Path, description = "Milestone id")),
    responses(
        (status = 200, description = "The milestone", body = MilestoneDto),
        (status = 404, description = "Milestone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_milestone(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(id)?;

    let Some(milestone) = MilestoneService::new(&state.db).get(id).await? else {
        return Err(ResourceError::NotFound("Milestone").into());
    };

    Ok(Json(milestone))
}

#[utoipa::path(
    post,
    path = "/api/roadmap/milestones",
    tag = ROADMAP_TAG,
    request_body = CreateMilestoneDto,
    responses(
        (status = 201, description = "Milestone created", body = MilestoneDto),
        (status = 400, description = "Missing title or invalid date", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_milestone(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateMilestoneDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let payload = parse_body(body)?;

    let milestone = MilestoneService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(milestone)))
}

#[utoipa::path(
    patch,
    path = "/api/roadmap/milestones/{id}",
    tag = ROADMAP_TAG,
    params(("id" = i32, Path, description = "Milestone id")),
    request_body = UpdateMilestoneDto,
    responses(
        (status = 200, description = "Milestone updated", body = MilestoneDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Milestone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_milestone(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateMilestoneDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;
    let payload = parse_body(body)?;

    let Some(milestone) = MilestoneService::new(&state.db).update(id, payload).await? else {
        return Err(ResourceError::NotFound("Milestone").into());
    };

    Ok(Json(milestone))
}

/// Delete a milestone that no roadmap item belongs to
///
/// Projects starting or ending at the milestone lose that reference.
#[utoipa::path(
    delete,
    path = "/api/roadmap/milestones/{id}",
    tag = ROADMAP_TAG,
    params(("id" = i32, Path, description = "Milestone id")),
    responses(
        (status = 204, description = "Milestone deleted"),
        (status = 400, description = "Milestone still has roadmap items", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Milestone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_milestone(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;

    if !MilestoneService::new(&state.db).delete(id).await? {
        return Err(ResourceError::NotFound("Milestone").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
