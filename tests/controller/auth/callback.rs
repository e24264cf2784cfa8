use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use compass::{
    model::user::Role,
    server::{
        controller::auth::{callback, CallbackParams},
        model::session::{
            auth::{SessionAuthCsrf, SessionAuthPkce},
            user::SessionUser,
        },
    },
};

use super::*;

async fn insert_login_state(test: &TestContext) -> CallbackParams {
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();
    SessionAuthPkce::insert(&test.session, "verifier")
        .await
        .unwrap();

    CallbackParams {
        state: "state".to_string(),
        code: "code".to_string(),
    }
}

#[tokio::test]
/// Expect an allow-listed e-mail to be stored in session as an editor
async fn logs_in_editor() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_oauth_endpoints(TEST_EDITOR_EMAIL, Some("Editor"))
        .build()
        .await?;
    let params = insert_login_state(&test).await;

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/");

    let user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user.email, TEST_EDITOR_EMAIL);
    assert_eq!(user.role, Role::Editor);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect any other e-mail to be stored in session as a viewer
async fn logs_in_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_oauth_endpoints(TEST_VIEWER_EMAIL, None)
        .build()
        .await?;
    let params = insert_login_state(&test).await;

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    assert!(result.is_ok());
    let user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user.role, Role::Viewer);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the CSRF state does not match
async fn fails_for_state_mismatch() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let mut params = insert_login_state(&test).await;
    params.state = "incorrect_state".to_string();

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the provider rejects the code
async fn fails_when_token_exchange_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_endpoint(|server| server.mock("POST", "/token").with_status(400).create())
        .build()
        .await?;
    let params = insert_login_state(&test).await;

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(params),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
