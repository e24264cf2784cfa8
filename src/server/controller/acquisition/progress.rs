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
            AcquisitionFilterParams, AcquisitionProgressDto, CreateAcquisitionProgressDto,
            UpdateAcquisitionProgressDto,
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
        service::acquisition::progress::AcquisitionProgressService,
    },
};

/// List progress records newest first, optionally for a single acquisition
#[utoipa::path(
    get,
    path = "/api/acquisition-progress",
    tag = ACQUISITION_TAG,
    params(AcquisitionFilterParams),
    responses(
        (status = 200, description = "Progress records", body = Vec<AcquisitionProgressDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_progress_records(
    State(state): State<AppState>,
    Query(params): Query<AcquisitionFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let progress_records = AcquisitionProgressService::new(&state.db)
        .get_all(params.acquisition_id)
        .await?;

    Ok(Json(progress_records))
}

#[utoipa::path(
    get,
    path = "/api/acquisition-progress/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Acquisition progress id")),
    responses(
        (status = 200, description = "The acquisition progress record", body = AcquisitionProgressDto),
        (status = 404, description = "Acquisition progress not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_progress(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(id)?;

    let Some(progress) = AcquisitionProgressService::new(&state.db).get(id).await? else {
        return Err(ResourceError::NotFound("Acquisition progress").into());
    };

    Ok(Json(progress))
}

/// Create the progress record of an acquisition, counters default to zero
#[utoipa::path(
    post,
    path = "/api/acquisition-progress",
    tag = ACQUISITION_TAG,
    request_body = CreateAcquisitionProgressDto,
    responses(
        (status = 201, description = "Acquisition progress created", body = AcquisitionProgressDto),
        (status = 400, description = "Missing or unknown acquisition, or progress already recorded", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_progress(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateAcquisitionProgressDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let payload = parse_body(body)?;

    let progress = AcquisitionProgressService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(progress)))
}

#[utoipa::path(
    patch,
    path = "/api/acquisition-progress/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Acquisition progress id")),
    request_body = UpdateAcquisitionProgressDto,
    responses(
        (status = 200, description = "Acquisition progress updated", body = AcquisitionProgressDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Acquisition progress not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_progress(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateAcquisitionProgressDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;
    let payload = parse_body(body)?;

    let Some(progress) = AcquisitionProgressService::new(&state.db)
        .update(id, payload)
        .await?
    else {
        return Err(ResourceError::NotFound("Acquisition progress").into());
    };

    Ok(Json(progress))
}

#[utoipa::path(
    delete,
    path = "/api/acquisition-progress/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Acquisition progress id")),
    responses(
        (status = 200, description = "Acquisition progress deleted", body = MessageDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Acquisition progress not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_progress(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;

    if !AcquisitionProgressService::new(&state.db).delete(id).await? {
        return Err(ResourceError::NotFound("Acquisition progress").into());
    }

    Ok(Json(MessageDto {
        message: "Acquisition progress deleted successfully".to_string(),
    }))
}
