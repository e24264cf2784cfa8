use axum::{http::StatusCode, response::IntoResponse};
use compass::{model::user::UserDto, server::controller::auth::get_user};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect 200 with the session user and role
async fn returns_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.login_viewer().await?;

    let result = get_user(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserDto = json_body(resp).await;
    assert_eq!(body, user);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when nobody is logged in
async fn returns_not_found_without_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_user(test.session).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
