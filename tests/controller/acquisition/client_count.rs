use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use compass::{
    model::acquisition::{
        AcquisitionFilterParams, ClientCountDto, CreateClientCountDto, UpdateClientCountDto,
    },
    server::controller::acquisition::client_count::{
        create_client_count, delete_client_count, get_client_count, get_client_counts,
        update_client_count,
    },
};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect 201 with `activeInConsole` defaulting to false
async fn creates_client_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let payload = CreateClientCountDto {
        acquisition_id: Some(acquisition.id),
        client_vitally_id: Some("vitally-42".to_string()),
        client_name: Some("Initech".to_string()),
        ..Default::default()
    };

    let resp = create_client_count(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let client_count: ClientCountDto = json_body(resp).await;
    assert_eq!(client_count.client_name, "Initech");
    assert_eq!(client_count.org_id, None);
    assert!(!client_count.active_in_console);

    Ok(())
}

#[tokio::test]
/// Expect 400 without a client name
async fn rejects_missing_client_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let payload = CreateClientCountDto {
        acquisition_id: Some(acquisition.id),
        client_vitally_id: Some("vitally-42".to_string()),
        ..Default::default()
    };

    let result = create_client_count(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect the list ordered by client name
async fn lists_by_client_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    test.acquisition()
        .insert_client_count(acquisition.id, "Umbrella", true)
        .await?;
    test.acquisition()
        .insert_client_count(acquisition.id, "Hooli", false)
        .await?;

    let params = AcquisitionFilterParams {
        acquisition_id: Some(acquisition.id),
    };
    let resp = get_client_counts(State(test.into_app_state()), Query(params))
        .await
        .unwrap()
        .into_response();

    let client_counts: Vec<ClientCountDto> = json_body(resp).await;
    let names: Vec<&str> = client_counts.iter().map(|c| c.client_name.as_str()).collect();
    assert_eq!(names, vec!["Hooli", "Umbrella"]);

    Ok(())
}

#[tokio::test]
/// Expect a null org id to clear it and other fields to stay
async fn updates_client_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    let client_count = test
        .acquisition()
        .insert_client_count(acquisition.id, "Hooli", false)
        .await?;

    let payload: UpdateClientCountDto =
        serde_json::from_str(r#"{"activeInConsole":true,"orgId":null}"#)?;

    let resp = update_client_count(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(client_count.id)),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    let updated: ClientCountDto = json_body(resp).await;
    assert!(updated.active_in_console);
    assert_eq!(updated.org_id, None);
    assert_eq!(updated.client_name, "Hooli");

    Ok(())
}

#[tokio::test]
/// Expect a viewer to be refused and an editor to delete the record
async fn deletes_client_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    let client_count = test
        .acquisition()
        .insert_client_count(acquisition.id, "Hooli", false)
        .await?;

    test.login_viewer().await?;
    let result = delete_client_count(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(client_count.id)),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    test.login_editor().await?;
    let resp = delete_client_count(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(client_count.id)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_client_count(State(test.into_app_state()), Ok(Path(client_count.id))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
