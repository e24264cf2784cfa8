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
            AcquisitionFilterParams, CreateFunctionalityEpicDto, FunctionalityEpicDto,
            UpdateFunctionalityEpicDto,
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
        service::acquisition::epic::FunctionalityEpicService,
    },
};

#[utoipa::path(
    get,
    path = "/api/functionality-epics",
    tag = ACQUISITION_TAG,
    params(AcquisitionFilterParams),
    responses(
        (status = 200, description = "Functionality epics", body = Vec<FunctionalityEpicDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_epics(
    State(state): State<AppState>,
    Query(params): Query<AcquisitionFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let epics = FunctionalityEpicService::new(&state.db).get_all(params.acquisition_id).await?;

    Ok(Json(epics))
}

#[utoipa::path(
    get,
    path = "/api/functionality-epics/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Functionality epic id")),
    responses(
        (status = 200, description = "The functionality epic", body = FunctionalityEpicDto),
        (status = 404, description = "Functionality epic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_epic(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(id)?;

    let Some(epic) = FunctionalityEpicService::new(&state.db).get(id).await? else {
        return Err(ResourceError::NotFound("Functionality epic").into());
    };

    Ok(Json(epic))
}

#[utoipa::path(
    post,
    path = "/api/functionality-epics",
    tag = ACQUISITION_TAG,
    request_body = CreateFunctionalityEpicDto,
    responses(
        (status = 201, description = "Functionality epic created", body = FunctionalityEpicDto),
        (status = 400, description = "Missing fields or unknown acquisition", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_epic(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateFunctionalityEpicDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let payload = parse_body(body)?;

    let epic = FunctionalityEpicService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(epic)))
}

#[utoipa::path(
    patch,
    path = "/api/functionality-epics/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Functionality epic id")),
    request_body = UpdateFunctionalityEpicDto,
    responses(
        (status = 200, description = "Functionality epic updated", body = FunctionalityEpicDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Functionality epic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_epic(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateFunctionalityEpicDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;
    let payload = parse_body(body)?;

    let Some(epic) = FunctionalityEpicService::new(&state.db).update(id, payload).await? else {
        return Err(ResourceError::NotFound("Functionality epic").into());
    };

    Ok(Json(epic))
}

#[utoipa::path(
    delete,
    path = "/api/functionality-epics/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Functionality epic id")),
    responses(
        (status = 200, description = "Functionality epic deleted", body = MessageDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Functionality epic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_epic(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;

    if !FunctionalityEpicService::new(&state.db).delete(id).await? {
        return Err(ResourceError::NotFound("Functionality epic").into());
    }

    Ok(Json(MessageDto {
        message: "Functionality epic deleted successfully".to_string(),
    }))
}
