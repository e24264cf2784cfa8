use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use compass::{
    model::{
        api::ErrorDto,
        roadmap::{CreateMilestoneDto, MilestoneDto, UpdateMilestoneDto},
    },
    server::controller::roadmap::milestone::{
        create_milestone, delete_milestone, get_milestone, get_milestones, update_milestone,
    },
};
use sea_orm::EntityTrait;

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect 201 with an id, after which the list returns it in date order
async fn created_milestone_is_listed_in_date_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    test.roadmap().insert_milestone("Q2 2026", date(2026, 4, 1)).await?;

    let payload = CreateMilestoneDto {
        title: Some("Q1 2026".to_string()),
        date: Some("2026-01-01".to_string()),
    };

    let resp = create_milestone(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: MilestoneDto = json_body(resp).await;
    assert!(created.id > 0);

    let resp = get_milestones(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    let milestones: Vec<MilestoneDto> = json_body(resp).await;
    let titles: Vec<&str> = milestones.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Q1 2026", "Q2 2026"]);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the title or date is missing, or the date is invalid
async fn rejects_invalid_payloads() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;

    let payloads = [
        CreateMilestoneDto {
            title: None,
            date: Some("2026-01-01".to_string()),
        },
        CreateMilestoneDto {
            title: Some("Q1".to_string()),
            date: None,
        },
        CreateMilestoneDto {
            title: Some("Q1".to_string()),
            date: Some("January".to_string()),
        },
    ];

    for payload in payloads {
        let result = create_milestone(
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
/// Expect 403 for a viewer
async fn forbids_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_viewer().await?;

    let payload = CreateMilestoneDto {
        title: Some("Q1".to_string()),
        date: Some("2026-01-01".to_string()),
    };

    let result = create_milestone(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Forbidden");

    Ok(())
}

#[tokio::test]
/// Expect 400 when neither title nor date is provided, and for an empty title
async fn rejects_empty_updates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let milestone = test.roadmap().insert_milestone("Q1", date(2026, 1, 1)).await?;

    let payloads = [
        UpdateMilestoneDto::default(),
        UpdateMilestoneDto {
            title: Some("  ".to_string()),
            date: None,
        },
    ];

    for payload in payloads {
        let result = update_milestone(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(milestone.id)),
            Ok(Json(payload)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    Ok(())
}

#[tokio::test]
/// Expect the date to move while the title stays
async fn updates_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let milestone = test.roadmap().insert_milestone("Q1", date(2026, 1, 1)).await?;

    let payload = UpdateMilestoneDto {
        title: None,
        date: Some("2026-02-15".to_string()),
    };

    let resp = update_milestone(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(milestone.id)),
        Ok(Json(payload)),
    )
    .await
    .unwrap()
    .into_response();

    let updated: MilestoneDto = json_body(resp).await;
    assert_eq!(updated.title, "Q1");
    assert_eq!(updated.date.date(), date(2026, 2, 15));

    Ok(())
}

#[tokio::test]
/// Expect 400 and the milestone left intact while roadmap items reference it
async fn refuses_to_delete_milestone_with_items() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let milestone = test.roadmap().insert_milestone("Q1", date(2026, 1, 1)).await?;
    test.roadmap().insert_item("Item", milestone.id).await?;

    let result = delete_milestone(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(milestone.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(
        body.error,
        "Cannot delete milestone with associated roadmap items."
    );
    let still_there = entity::prelude::Milestone::find_by_id(milestone.id)
        .one(&test.db)
        .await?;
    assert!(still_there.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 204 and project references to the milestone cleared
async fn deletes_unused_milestone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_editor().await?;
    let milestone = test.roadmap().insert_milestone("Q1", date(2026, 1, 1)).await?;
    let acquisition = test.acquisition().insert_acquisition("Acme", None).await?;
    let project = test
        .acquisition()
        .insert_project("Migrate", Some(milestone.id), Some(milestone.id), &[acquisition.id])
        .await?;

    let resp = delete_milestone(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Path(milestone.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let project = entity::prelude::Project::find_by_id(project.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(project.start_milestone_id, None);
    assert_eq!(project.end_milestone_id, None);

    let result = get_milestone(State(test.into_app_state()), Ok(Path(milestone.id))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
