use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        acquisition::{CreateProjectDto, ProjectDto, UpdateProjectDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::{
            acquisition::ACQUISITION_TAG,
            util::{editor::require_editor, json::parse_body, path::parse_id},
        },
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::acquisition::project::ProjectService,
    },
};

/// List projects newest first with their acquisitions and milestones
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = ACQUISITION_TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let projects = ProjectService::new(&state.db).get_all().await?;

    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(id)?;

    let Some(project) = ProjectService::new(&state.db).get(id).await? else {
        return Err(ResourceError::NotFound("Project").into());
    };

    Ok(Json(project))
}

/// Create a project linked to at least one acquisition
///
/// # Responses
/// - 201 (Created): The project with its acquisitions and milestones
/// - 400 (Bad Request): Missing title, no acquisitions, or unknown acquisition/milestone ids
/// - 403 (Forbidden): No editor in session
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = ACQUISITION_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Missing title or unknown references", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateProjectDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let payload = parse_body(body)?;

    let project = ProjectService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Apply the keys present in the body, `acquisitionIds` replaces the linked acquisitions
#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Project id")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateProjectDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;
    let payload = parse_body(body)?;

    let Some(project) = ProjectService::new(&state.db).update(id, payload).await? else {
        return Err(ResourceError::NotFound("Project").into());
    };

    Ok(Json(project))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = ACQUISITION_TAG,
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = MessageDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    require_editor(&session).await?;
    let id = parse_id(id)?;

    if !ProjectService::new(&state.db).delete(id).await? {
        return Err(ResourceError::NotFound("Project").into());
    }

    Ok(Json(MessageDto {
        message: "Project deleted successfully".to_string(),
    }))
}
