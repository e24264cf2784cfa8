use axum::{extract::State, http::StatusCode, response::IntoResponse};
use compass::server::controller::auth::login;

use super::*;

#[tokio::test]
/// Expect a 307 redirect to the provider with state, PKCE challenge and scopes
async fn redirects_to_provider() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = login(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp.headers()["location"].to_str().unwrap().to_string();
    assert!(location.starts_with(&test.auth_url()));
    assert!(location.contains("code_challenge="));
    assert!(location.contains("scope=openid+email+profile"));

    Ok(())
}

#[tokio::test]
/// Expect the CSRF state in the redirect to be the one stored in session
async fn stores_state_in_session() -> Result<(), TestError> {
    use compass::server::model::session::auth::SessionAuthCsrf;

    let test = test_setup_with_tables!()?;

    let resp = login(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    let location = resp.headers()["location"].to_str().unwrap().to_string();
    let stored = SessionAuthCsrf::get(&test.session).await.unwrap();
    assert!(location.contains(&format!("state={}", stored)));

    Ok(())
}
