use axum::{http::StatusCode, response::IntoResponse};
use compass::server::{controller::auth::logout, model::session::user::SessionUser};

use super::*;

#[tokio::test]
/// Expect 307 temporary redirect and an empty session after logout
async fn clears_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/");
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect even without session data
async fn redirects_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
