use axum::{extract::State, http::StatusCode, response::IntoResponse};
use compass::{model::api::HealthDto, server::controller::health::health};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect 200 with status ok while the database is reachable
async fn returns_ok() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = health(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthDto = json_body(resp).await;
    assert_eq!(body.status, "ok");

    Ok(())
}

#[tokio::test]
/// Expect 500 once the connection has been closed
async fn fails_when_database_closed() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state = test.into_app_state();
    test.db.clone().close().await?;

    let result = health(State(state)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
