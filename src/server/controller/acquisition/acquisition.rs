use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        acquisition::{
            AcquisitionDto, CreateAcquisitionDto, TimelineDto, TimelineParams, TrackerEntryDto,
            UpdateAcquisitionDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::{
            acquisition::ACQUISITION_TAG,
            util::{editor::require_editor, json::parse_body, path::parse_id},
        },
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::acquisition::{
            acquisition::AcquisitionService, timeline::timeline_service,
            tracker::tracker_service,
        },
    },
};

/// List acquisitions newest first with their projects and tracking records
#[utoipa::path(
    get,
    path = "/api/acquisitions",
    tag = ACQUISITION_TAG,
    responses(
        (status = 200, description = "All acquisitions", body = Vec<AcquisitionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_acquisitions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let acquisitions = AcquisitionService::new(&state.db).get_all().await?;

    Ok(Json(acquisitions))
}

#[utoipa::path(
    get,
    path = "/api/acquisitions/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Acquisition id")),
    responses(
        (status = 200, description = "The acquisition", body = AcquisitionDto),
        (status = 404, description = "Acquisition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_acquisition(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(id)?;

    let Some(acquisition) = AcquisitionService::new(&state.db).get(id).await? else {
        return Err(ResourceError::NotFound("Acquisition").into());
    };

    Ok(Json(acquisition))
}

#[utoipa::path(
    post,
    path = "/api/acquisitions",
    tag = ACQUISITION_TAG,
    request_body = CreateAcquisitionDto,
    responses(
        (status = 201, description = "Acquisition created", body = AcquisitionDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_acquisition(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateAcquisitionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let payload = parse_body(body)?;

    let acquisition = AcquisitionService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(acquisition)))
}

/// Update the name, description, integration overview or color of an acquisition
#[utoipa::path(
    patch,
    path = "/api/acquisitions/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Acquisition id")),
    request_body = UpdateAcquisitionDto,
    responses(
        (status = 200, description = "Acquisition updated", body = AcquisitionDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Acquisition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_acquisition(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateAcquisitionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;
    let payload = parse_body(body)?;

    let Some(acquisition) = AcquisitionService::new(&state.db)
        .update(id, payload)
        .await?
    else {
        return Err(ResourceError::NotFound("Acquisition").into());
    };

    Ok(Json(acquisition))
}

/// Delete an acquisition together with its tracking records and project links
#[utoipa::path(
    delete,
    path = "/api/acquisitions/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Acquisition id")),
    responses(
        (status = 200, description = "Acquisition deleted", body = MessageDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Acquisition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_acquisition(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;

    if !AcquisitionService::new(&state.db).delete(id).await? {
        return Err(ResourceError::NotFound("Acquisition").into());
    }

    Ok(Json(MessageDto {
        message: "Acquisition deleted successfully".to_string(),
    }))
}

/// Milestone-indexed spans of every acquisition and its projects
#[utoipa::path(
    get,
    path = "/api/acquisitions/timeline",
    tag = ACQUISITION_TAG,
    params(TimelineParams),
    responses(
        (status = 200, description = "Acquisition timeline", body = TimelineDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(params): Query<TimelineParams>,
) -> Result<impl IntoResponse, Error> {
    let timeline = timeline_service(&state.db, params.sort.unwrap_or_default()).await?;

    Ok(Json(timeline))
}

/// Integration progress summary per acquisition
#[utoipa::path(
    get,
    path = "/api/acquisitions/tracker",
    tag = ACQUISITION_TAG,
    responses(
        (status = 200, description = "Acquisition tracker", body = Vec<TrackerEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tracker(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tracker = tracker_service(&state.db).await?;

    Ok(Json(tracker))
}
