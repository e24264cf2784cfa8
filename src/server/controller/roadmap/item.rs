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
        roadmap::{CreateRoadmapItemDto, RoadmapItemDto, UpdateRoadmapItemDto},
    },
    server::{
        controller::{
            roadmap::ROADMAP_TAG,
            util::{editor::require_editor, json::parse_body, path::parse_id},
        },
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::roadmap::item::RoadmapItemService,
    },
};

/// List every roadmap item in creation order
#[utoipa::path(
    get,
    path = "/api/roadmap/items",
    tag = ROADMAP_TAG,
    responses(
        (status = 200, description = "All roadmap items", body = Vec<RoadmapItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let items = RoadmapItemService::new(&state.db).get_all().await?;

    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/roadmap/items/{id}",
    tag = ROADMAP_TAG,
    params(("id" = i32, Path, description = "Roadmap item id")),
    responses(
        (status = 200, description = "The roadmap item", body = RoadmapItemDto),
        (status = 404, description = "Roadmap item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(id)?;

    let Some(item) = RoadmapItemService::new(&state.db).get(id).await? else {
        return Err(ResourceError::NotFound("Roadmap item").into());
    };

    Ok(Json(item))
}

/// Create a roadmap item authored by the session user
///
/// # Responses
/// - 201 (Created): The created item with its milestone and relations
/// - 400 (Bad Request): Missing fields, invalid date or unknown milestone/related ids
/// - 403 (Forbidden): No editor in session
#[utoipa::path(
    post,
    path = "/api/roadmap/items",
    tag = ROADMAP_TAG,
    request_body = CreateRoadmapItemDto,
    responses(
        (status = 201, description = "Roadmap item created", body = RoadmapItemDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateRoadmapItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = require_editor(&session).await?;
    let payload = parse_body(body)?;

    let item = RoadmapItemService::new(&state.db)
        .create(payload, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Apply the keys present in the body to a roadmap item
#[utoipa::path(
    patch,
    path = "/api/roadmap/items/{id}",
    tag = ROADMAP_TAG,
    params(("id" = i32, Path, description = "Roadmap item id")),
    request_body = UpdateRoadmapItemDto,
    responses(
        (status = 200, description = "Roadmap item updated", body = RoadmapItemDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Roadmap item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateRoadmapItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = require_editor(&session).await?;
    let id = parse_id(id)?;
    let payload = parse_body(body)?;

    let Some(item) = RoadmapItemService::new(&state.db)
        .update(id, payload, user.id)
        .await?
    else {
        return Err(ResourceError::NotFound("Roadmap item").into());
    };

    Ok(Json(item))
}

/// Delete a roadmap item and its relations in both directions
#[utoipa::path(
    delete,
    path = "/api/roadmap/items/{id}",
    tag = ROADMAP_TAG,
    params(("id" = i32, Path, description = "Roadmap item id")),
    responses(
        (status = 204, description = "Roadmap item deleted"),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Roadmap item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;

    if !RoadmapItemService::new(&state.db).delete(id).await? {
        return Err(ResourceError::NotFound("Roadmap item").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
