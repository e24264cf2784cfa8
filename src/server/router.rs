//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa-axum so its `#[utoipa::path]` annotation ends
//! up in the generated OpenAPI document, served at `/api/docs/openapi.json` with Swagger UI
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/api/auth/{login,callback,logout,user}` - OAuth login flow and session user
/// - `/api/health` - database liveness
/// - `/api/roadmap/items`, `/api/roadmap/milestones` - roadmap CRUD
/// - `/api/roadmap/view`, `/api/roadmap/export` - derived view and export
/// - `/api/acquisitions`, `/api/projects` - acquisition and project CRUD
/// - `/api/acquisitions/timeline`, `/api/acquisitions/tracker` - derived acquisition views
/// - `/api/acquisition-progress`, `/api/functionality-epics`,
///   `/api/acquisition-client-counts` - per-acquisition tracking records
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, auth });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Compass", description = "Compass roadmap API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::roadmap::ROADMAP_TAG, description = "Roadmap items, milestones and views"),
        (name = controller::acquisition::ACQUISITION_TAG, description = "Acquisitions, projects and integration tracking"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::health::health))
        .routes(routes!(
            controller::roadmap::item::get_items,
            controller::roadmap::item::create_item
        ))
        .routes(routes!(
            controller::roadmap::item::get_item,
            controller::roadmap::item::update_item,
            controller::roadmap::item::delete_item
        ))
        .routes(routes!(
            controller::roadmap::milestone::get_milestones,
            controller::roadmap::milestone::create_milestone
        ))
        .routes(routes!(
            controller::roadmap::milestone::get_milestone,
            controller::roadmap::milestone::update_milestone,
            controller::roadmap::milestone::delete_milestone
        ))
        .routes(routes!(controller::roadmap::view::get_view))
        .routes(routes!(controller::roadmap::view::export))
        .routes(routes!(
            controller::acquisition::acquisition::get_acquisitions,
            controller::acquisition::acquisition::create_acquisition
        ))
        .routes(routes!(controller::acquisition::acquisition::get_timeline))
        .routes(routes!(controller::acquisition::acquisition::get_tracker))
        .routes(routes!(
            controller::acquisition::acquisition::get_acquisition,
            controller::acquisition::acquisition::update_acquisition,
            controller::acquisition::acquisition::delete_acquisition
        ))
        .routes(routes!(
            controller::acquisition::project::get_projects,
            controller::acquisition::project::create_project
        ))
        .routes(routes!(
            controller::acquisition::project::get_project,
            controller::acquisition::project::update_project,
            controller::acquisition::project::delete_project
        ))
        .routes(routes!(
            controller::acquisition::progress::get_progress_records,
            controller::acquisition::progress::create_progress
        ))
        .routes(routes!(
            controller::acquisition::progress::get_progress,
            controller::acquisition::progress::update_progress,
            controller::acquisition::progress::delete_progress
        ))
        .routes(routes!(
            controller::acquisition::epic::get_epics,
            controller::acquisition::epic::create_epic
        ))
        .routes(routes!(
            controller::acquisition::epic::get_epic,
            controller::acquisition::epic::update_epic,
            controller::acquisition::epic::delete_epic
        ))
        .routes(routes!(
            controller::acquisition::client_count::get_client_counts,
            controller::acquisition::client_count::create_client_count
        ))
        .routes(routes!(
            controller::acquisition::client_count::get_client_count,
            controller::acquisition::client_count::update_client_count,
            controller::acquisition::client_count::delete_client_count
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
