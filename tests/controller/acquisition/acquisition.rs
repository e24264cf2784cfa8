use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use compass::{
    model::{
        acquisition::{
            AcquisitionDto, CreateAcquisitionDto, SpanKind, StepStatus, TimelineDto,
            TimelineParams, TrackerEntryDto, UpdateAcquisitionDto,
        },
        api::MessageDto,
    },
    server::controller::acquisition::acquisition::{
        create_acquisition, delete_acquisition, get_acquisition, get_acquisitions,
        get_timeline, get_tracker, update_acquisition,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect 201 with the stored fields
async fn creates_acquisition() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;

    let payload = CreateAcquisitionDto {
        name: Some("Acme".to_string()),
        color: Some("#3b82f6".to_string()),
        ..Default::default()
    };

    let resp = create_acquisition(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let acquisition: AcquisitionDto = json_body(resp).await;
    assert_eq!(acquisition.name, "Acme");
    assert_eq!(acquisition.color.as_deref(), Some("#3b82f6"));
    assert!(acquisition.projects.is_empty());
    assert!(acquisition.progress.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 without a name
async fn rejects_missing_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;

    let result = create_acquisition(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(CreateAcquisitionDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect a color-only patch to leave every other field untouched
async fn patch_color_changes_only_color() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let payload: UpdateAcquisitionDto = serde_json::from_str(r##"{"color":"#ff0000"}"##)?;

    let resp = update_acquisition(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(acquisition.id)),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: AcquisitionDto = json_body(resp).await;
    assert_eq!(updated.color.as_deref(), Some("#ff0000"));
    assert_eq!(updated.name, acquisition.name);
    assert_eq!(updated.description, acquisition.description);
    assert_eq!(updated.integration_overview, acquisition.integration_overview);

    Ok(())
}

#[tokio::test]
/// Expect the list newest first with projects and tracking records embedded
async fn lists_acquisitions_with_related_records() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let older = test.acquisition().insert_acquisition("Older", None).await?;
    let newer = test.acquisition().insert_acquisition("Newer", None).await?;
    test.acquisition()
        .insert_project("Migrate", None, None, &[older.id])
        .await?;
    test.acquisition()
        .insert_progress(older.id, true, (1, 0, 1), (2, 1, 0))
        .await?;
    test.acquisition().insert_epic(older.id, "EPIC-1", "Billing").await?;
    test.acquisition()
        .insert_client_count(older.id, "Globex", true)
        .await?;

    let resp = get_acquisitions(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let acquisitions: Vec<AcquisitionDto> = json_body(resp).await;
    assert_eq!(acquisitions.len(), 2);
    assert_eq!(acquisitions[0].id, newer.id);
    let older = &acquisitions[1];
    assert_eq!(older.projects.len(), 1);
    assert!(older.progress.is_some());
    assert_eq!(older.epics.len(), 1);
    assert_eq!(older.client_counts.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 200 with a message and the tracking records removed
async fn deletes_acquisition_and_tracking_records() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    test.acquisition()
        .insert_progress(acquisition.id, false, (0, 0, 0), (0, 0, 0))
        .await?;
    test.acquisition()
        .insert_epic(acquisition.id, "EPIC-1", "Billing")
        .await?;

    let resp = delete_acquisition(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(acquisition.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = json_body(resp).await;
    assert!(!body.message.is_empty());
    assert_eq!(
        entity::prelude::AcquisitionProgress::find()
            .count(&test.db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::FunctionalityEpic::find()
            .count(&test.db)
            .await?,
        0
    );

    let result = get_acquisition(State(test.into_app_state()), Ok(Path(acquisition.id))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 403 for a viewer and the acquisition kept
async fn forbids_viewer_delete() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_viewer().await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;

    let result = delete_acquisition(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(acquisition.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(entity::prelude::Acquisition::find().count(&test.db).await?, 1);

    Ok(())
}

#[tokio::test]
/// Expect spans expressed as indexes into the sorted milestones
async fn builds_timeline() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let q2 = test
        .roadmap()
        .insert_milestone("Q2", NaiveDate::from_ymd_opt(2026, 6, 30).unwrap())
        .await?;
    let q1 = test
        .roadmap()
        .insert_milestone("Q1", NaiveDate::from_ymd_opt(2026, 3, 31).unwrap())
        .await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    test.acquisition()
        .insert_project("Migrate", Some(q1.id), Some(q2.id), &[acquisition.id])
        .await?;

    let resp = get_timeline(
        State(test.into_app_state()),
        Query(TimelineParams::default()),
    )
    .await
    .unwrap()
    .into_response();

    let timeline: TimelineDto = json_body(resp).await;
    assert_eq!(timeline.milestones[0].id, q1.id);
    let entry = &timeline.acquisitions[0];
    assert!(entry.color.starts_with('#'));
    let span = entry.projects[0].span.unwrap();
    assert_eq!(span.kind, SpanKind::Range);
    assert_eq!((span.start_index, span.end_index), (0, 1));

    Ok(())
}

#[tokio::test]
/// Expect a summary for acquisitions with progress and none otherwise
async fn builds_tracker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let tracked = test.acquisition().insert_acquisition("Acme", None).await?;
    test.acquisition().insert_acquisition("Globex", None).await?;
    test.acquisition()
        .insert_progress(tracked.id, true, (0, 0, 4), (4, 4, 4))
        .await?;

    let resp = get_tracker(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let tracker: Vec<TrackerEntryDto> = json_body(resp).await;
    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker[0].acquisition.name, "Acme");
    let summary = tracker[0].summary.as_ref().unwrap();
    assert_eq!(summary.overall_percent, 100);
    assert_eq!(summary.functionality_status, StepStatus::Complete);
    assert!(tracker[1].summary.is_none());

    Ok(())
}
