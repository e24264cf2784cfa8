//! Requests sent through the full router with a session layer, exercising extractor order,
//! route registration and the cookie-backed login flow.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use compass::{
    model::{api::ErrorDto, user::UserDto},
    server::router::routes,
};
use compass_test_utils::prelude::*;
use oauth2::url::Url;
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{json_body, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    request.body(Body::empty()).unwrap()
}

#[tokio::test]
/// Expect anonymous mutations to be refused before anything is written
async fn refuses_anonymous_mutation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/acquisitions",
            r#"{"name":"Acme"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "Forbidden");
    assert_eq!(entity::prelude::Acquisition::find().count(&test.db).await?, 0);

    Ok(())
}

#[tokio::test]
/// Expect the role check to run before the body is parsed
async fn refuses_anonymous_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let resp = app
        .oneshot(json_request(Method::POST, "/api/roadmap/items", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect health and the OpenAPI document to be served
async fn serves_health_and_docs() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let resp = app.clone().oneshot(get("/api/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    assert!(doc["paths"]["/api/acquisitions/timeline"].is_object());
    assert!(doc["paths"]["/api/roadmap/items/{id}"]["patch"].is_object());

    Ok(())
}

#[tokio::test]
/// Expect fixed acquisition paths to win over the id route
async fn routes_timeline_and_tracker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    for uri in ["/api/acquisitions/timeline?sort=desc", "/api/acquisitions/tracker"] {
        let resp = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }

    let resp = app
        .oneshot(get("/api/acquisitions/42", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect an unknown item id to produce a 404 error body
async fn returns_not_found_for_unknown_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let resp = app
        .oneshot(get("/api/roadmap/items/999", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "Roadmap item not found");

    Ok(())
}

#[tokio::test]
/// Expect a non-numeric id to produce a 400 error body
async fn rejects_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let resp = app
        .oneshot(get("/api/acquisitions/acme", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(error.error.starts_with("Invalid path parameter"));

    Ok(())
}

#[tokio::test]
/// Expect the role check to run before a malformed id is reported
async fn refuses_anonymous_mutation_with_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/roadmap/milestones/first")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "Forbidden");

    Ok(())
}

#[tokio::test]
/// Expect login, callback and user lookup to share one session cookie
async fn completes_login_flow() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_oauth_endpoints(TEST_EDITOR_EMAIL, Some("Editor"))
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(get("/api/auth/login", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let cookie = resp.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("id="));

    let location = Url::parse(resp.headers()[header::LOCATION].to_str().unwrap()).unwrap();
    let (_, state) = location
        .query_pairs()
        .find(|(key, _)| key == "state")
        .unwrap();

    let callback_uri = format!("/api/auth/callback?state={state}&code=code");
    let resp = app
        .clone()
        .oneshot(get(&callback_uri, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let resp = app
        .oneshot(get("/api/auth/user", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.email, TEST_EDITOR_EMAIL);
    test.assert_mocks();

    Ok(())
}
