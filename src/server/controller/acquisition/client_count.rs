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
            AcquisitionFilterParams, ClientCountDto, CreateClientCountDto, UpdateClientCountDto,
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
        service::acquisition::client_count::ClientCountService,
    },
};

/// List client counts ordered by client name
#[utoipa::path(
    get,
    path = "/api/acquisition-client-counts",
    tag = ACQUISITION_TAG,
    params(AcquisitionFilterParams),
    responses(
        (status = 200, description = "Client counts ordered by client name", body = Vec<ClientCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_counts(
    State(state): State<AppState>,
    Query(params): Query<AcquisitionFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let client_counts = ClientCountService::new(&state.db).get_all(params.acquisition_id).await?;

    Ok(Json(client_counts))
}

#[utoipa::path(
    get,
    path = "/api/acquisition-client-counts/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Client count id")),
    responses(
        (status = 200, description = "The client count", body = ClientCountDto),
        (status = 404, description = "Client count not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_count(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(id)?;

    let Some(client_count) = ClientCountService::new(&state.db).get(id).await? else {
        return Err(ResourceError::NotFound("Client count").into());
    };

    Ok(Json(client_count))
}

#[utoipa::path(
    post,
    path = "/api/acquisition-client-counts",
    tag = ACQUISITION_TAG,
    request_body = CreateClientCountDto,
    responses(
        (status = 201, description = "Client count created", body = ClientCountDto),
        (status = 400, description = "Missing fields or unknown acquisition", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client_count(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateClientCountDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let payload = parse_body(body)?;

    let client_count = ClientCountService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(client_count)))
}

#[utoipa::path(
    patch,
    path = "/api/acquisition-client-counts/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Client count id")),
    request_body = UpdateClientCountDto,
    responses(
        (status = 200, description = "Client count updated", body = ClientCountDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Client count not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client_count(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateClientCountDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;
    let payload = parse_body(body)?;

    let Some(client_count) = ClientCountService::new(&state.db).update(id, payload).await? else {
        return Err(ResourceError::NotFound("Client count").into());
    };

    Ok(Json(client_count))
}

/// Delete a single client count record
#[utoipa::path(
    delete,
    path = "/api/acquisition-client-counts/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Client count id")),
    responses(
        (status = 200, description = "Client count deleted", body = MessageDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Client count not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client_count(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;

    if !ClientCountService::new(&state.db).delete(id).await? {
        return Err(ResourceError::NotFound("Client count").into());
    }

    Ok(Json(MessageDto {
        message: "Client count deleted successfully".to_string(),
    }))
}
