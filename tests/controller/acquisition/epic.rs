use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use compass::{
    model::acquisition::{
        AcquisitionFilterParams, CreateFunctionalityEpicDto, FunctionalityEpicDto,
        UpdateFunctionalityEpicDto,
    },
    server::controller::acquisition::epic::{
        create_epic, delete_epic, get_epic, get_epics, update_epic,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect 201 with the optional fields stored as given
async fn creates_epic() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let payload = CreateFunctionalityEpicDto {
        acquisition_id: Some(acquisition.id),
        epic_id: Some("EPIC-12".to_string()),
        epic_name: Some("Single sign-on".to_string()),
        epic_link: Some("https://tracker.example.com/EPIC-12".to_string()),
        ..Default::default()
    };

    let resp = create_epic(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let epic: FunctionalityEpicDto = json_body(resp).await;
    assert_eq!(epic.acquisition_id, acquisition.id);
    assert_eq!(epic.epic_id, "EPIC-12");
    assert_eq!(epic.epic_status, None);

    Ok(())
}

#[tokio::test]
/// Expect 400 when a required field is missing or the acquisition is unknown
async fn rejects_incomplete_epic() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let payloads = [
        CreateFunctionalityEpicDto {
            acquisition_id: Some(acquisition.id),
            epic_name: Some("Single sign-on".to_string()),
            ..Default::default()
        },
        CreateFunctionalityEpicDto {
            acquisition_id: Some(acquisition.id),
            epic_id: Some("EPIC-12".to_string()),
            ..Default::default()
        },
        CreateFunctionalityEpicDto {
            epic_id: Some("EPIC-12".to_string()),
            epic_name: Some("Single sign-on".to_string()),
            ..Default::default()
        },
        CreateFunctionalityEpicDto {
            acquisition_id: Some(999),
            epic_id: Some("EPIC-12".to_string()),
            epic_name: Some("Single sign-on".to_string()),
            ..Default::default()
        },
    ];

    for payload in payloads {
        let result = create_epic(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Json(payload)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    assert_eq!(
        entity::prelude::FunctionalityEpic::find()
            .count(&test.db)
            .await?,
        0
    );

    Ok(())
}

#[tokio::test]
/// Expect only epics of the requested acquisition
async fn filters_by_acquisition() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let acme = test.acquisition().insert_acquisition("Acme", None).await?;
    let globex = test.acquisition().insert_acquisition("Globex", None).await?;
    test.acquisition().insert_epic(acme.id, "A-1", "Billing").await?;
    test.acquisition().insert_epic(globex.id, "G-1", "Reporting").await?;
    test.acquisition().insert_epic(globex.id, "G-2", "Exports").await?;

    let params = AcquisitionFilterParams {
        acquisition_id: Some(globex.id),
    };
    let resp = get_epics(State(test.into_app_state()), Query(params))
        .await
        .unwrap()
        .into_response();

    let epics: Vec<FunctionalityEpicDto> = json_body(resp).await;
    assert_eq!(epics.len(), 2);
    assert!(epics.iter().all(|e| e.acquisition_id == globex.id));

    let resp = get_epics(
        State(test.into_app_state()),
        Query(AcquisitionFilterParams::default()),
    )
    .await
    .unwrap()
    .into_response();

    let epics: Vec<FunctionalityEpicDto> = json_body(resp).await;
    assert_eq!(epics.len(), 3);

    Ok(())
}

#[tokio::test]
/// Expect present keys applied and an empty epic name rejected
async fn updates_epic() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    let epic = test
        .acquisition()
        .insert_epic(acquisition.id, "A-1", "Billing")
        .await?;

    let payload = UpdateFunctionalityEpicDto {
        epic_status: Some(Some("Done".to_string())),
        ..Default::default()
    };
    let resp = update_epic(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(epic.id)),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    let updated: FunctionalityEpicDto = json_body(resp).await;
    assert_eq!(updated.epic_status.as_deref(), Some("Done"));
    assert_eq!(updated.epic_name, "Billing");

    let payload = UpdateFunctionalityEpicDto {
        epic_name: Some("  ".to_string()),
        ..Default::default()
    };
    let result = update_epic(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(epic.id)),
        Ok(Json(payload)),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 on delete and 404 afterwards
async fn deletes_epic() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    let epic = test
        .acquisition()
        .insert_epic(acquisition.id, "A-1", "Billing")
        .await?;

    let resp = delete_epic(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(epic.id)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_epic(State(test.into_app_state()), Ok(Path(epic.id))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
