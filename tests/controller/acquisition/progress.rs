use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use compass::{
    model::acquisition::{
        AcquisitionFilterParams, AcquisitionProgressDto, CreateAcquisitionProgressDto,
        Disposition, UpdateAcquisitionProgressDto,
    },
    server::controller::acquisition::progress::{
        create_progress, delete_progress, get_progress, get_progress_records, update_progress,
    },
};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect 201 with counters defaulting to zero
async fn creates_progress_with_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let payload = CreateAcquisitionProgressDto {
        acquisition_id: Some(acquisition.id),
        disposition: Some(Disposition::Wrapped),
        functionality_epics_to_do: Some(3),
        ..Default::default()
    };

    let resp = create_progress(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let progress: AcquisitionProgressDto = json_body(resp).await;
    assert_eq!(progress.disposition, Some(Disposition::Wrapped));
    assert_eq!(progress.functionality_epics_to_do, 3);
    assert_eq!(progress.client_count_total, 0);
    assert!(!progress.dev_platform);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a missing or unknown acquisition and for a second record
async fn rejects_invalid_acquisition() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    test.acquisition()
        .insert_progress(acquisition.id, false, (0, 0, 0), (0, 0, 0))
        .await?;

    for acquisition_id in [None, Some(999), Some(acquisition.id)] {
        let payload = CreateAcquisitionProgressDto {
            acquisition_id,
            ..Default::default()
        };

        let result = create_progress(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Json(payload)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    Ok(())
}

#[tokio::test]
/// Expect 400 for negative counters on create and update
async fn rejects_negative_counters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let payload = CreateAcquisitionProgressDto {
        acquisition_id: Some(acquisition.id),
        functionality_epics_complete: Some(-3),
        ..Default::default()
    };
    let result = create_progress(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let progress = test
        .acquisition()
        .insert_progress(acquisition.id, false, (0, 0, 0), (10, 4, 2))
        .await?;
    let payload: UpdateAcquisitionProgressDto =
        serde_json::from_str(r#"{"clientCountTotal":-10}"#)?;
    let result = update_progress(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(progress.id)),
        Ok(Json(payload)),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect the acquisition filter to narrow the list
async fn filters_by_acquisition() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let acme = test.acquisition().insert_acquisition("Acme", None).await?;
    let globex = test.acquisition().insert_acquisition("Globex", None).await?;
    test.acquisition()
        .insert_progress(acme.id, false, (0, 0, 0), (0, 0, 0))
        .await?;
    test.acquisition()
        .insert_progress(globex.id, true, (0, 0, 0), (0, 0, 0))
        .await?;

    let params = AcquisitionFilterParams {
        acquisition_id: Some(globex.id),
    };
    let resp = get_progress_records(State(test.into_app_state()), Query(params))
        .await
        .unwrap()
        .into_response();

    let records: Vec<AcquisitionProgressDto> = json_body(resp).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].acquisition_id, globex.id);

    Ok(())
}

#[tokio::test]
/// Expect present counters to change and a null disposition to clear it
async fn updates_present_keys() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    let progress = test
        .acquisition()
        .insert_progress(acquisition.id, false, (2, 1, 0), (10, 4, 2))
        .await?;

    let payload: UpdateAcquisitionProgressDto =
        serde_json::from_str(r#"{"devPlatform":true,"clientActiveCount":5,"disposition":null}"#)?;

    let resp = update_progress(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(progress.id)),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    let updated: AcquisitionProgressDto = json_body(resp).await;
    assert!(updated.dev_platform);
    assert_eq!(updated.client_active_count, 5);
    assert_eq!(updated.client_access_count, 4);
    assert_eq!(updated.functionality_epics_to_do, 2);
    assert_eq!(updated.disposition, None);

    Ok(())
}

#[tokio::test]
/// Expect 200 on delete and 404 afterwards
async fn deletes_progress() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    let progress = test
        .acquisition()
        .insert_progress(acquisition.id, false, (0, 0, 0), (0, 0, 0))
        .await?;

    let resp = delete_progress(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(progress.id)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_progress(State(test.into_app_state()), Ok(Path(progress.id))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
