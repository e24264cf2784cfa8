use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use compass::{
    model::roadmap::{RoadmapExportDto, RoadmapViewDto, RoadmapViewParams},
    server::controller::roadmap::view::{export, get_view},
};
use entity::sea_orm_active_enums::{Category, ItemStatus};

use super::*;
use crate::util::json_body;

/// One milestone long past and one far ahead, each with a single item
async fn insert_past_and_future(test: &TestContext) -> Result<(i32, i32), TestError> {
    let past = test.roadmap().insert_milestone("2001", date(2001, 1, 1)).await?;
    let future = test.roadmap().insert_milestone("2099", date(2099, 1, 1)).await?;
    let past_item = test.roadmap().insert_item("Done long ago", past.id).await?;
    let future_item = test
        .roadmap()
        .insert_item_with("Someday", future.id, Category::Ai, ItemStatus::Planned)
        .await?;

    Ok((past_item.id, future_item.id))
}

async fn view(test: &TestContext, params: RoadmapViewParams) -> RoadmapViewDto {
    let resp = get_view(State(test.into_app_state()), Query(params))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    json_body(resp).await
}

#[tokio::test]
/// Expect historical milestones hidden by default and counted
async fn hides_historical_milestones() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, future_item) = insert_past_and_future(&test).await?;

    let view = view(&test, RoadmapViewParams::default()).await;

    assert_eq!(view.displayed_milestones.len(), 1);
    assert_eq!(view.historical_milestone_count, 1);
    assert_eq!(view.displayed_items.len(), 1);
    assert_eq!(view.displayed_items[0].id, future_item);
    assert_eq!(view.categories[0], "All");

    Ok(())
}

#[tokio::test]
/// Expect toggling show-historical to display every milestone
async fn shows_historical_milestones_when_requested() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    insert_past_and_future(&test).await?;

    let view = view(
        &test,
        RoadmapViewParams {
            show_historical: Some(true),
            ..Default::default()
        },
    )
    .await;

    assert_eq!(view.displayed_milestones.len(), 2);
    assert_eq!(view.historical_milestone_count, 0);
    assert_eq!(view.displayed_items.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect focus to show the item and its relations regardless of history
async fn focus_restricts_to_related_items() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (past_item, future_item) = insert_past_and_future(&test).await?;
    let future = test.roadmap().insert_milestone("2098", date(2098, 1, 1)).await?;
    let unrelated = test.roadmap().insert_item("Unrelated", future.id).await?;
    test.roadmap().relate_items(past_item, future_item).await?;

    let view = view(
        &test,
        RoadmapViewParams {
            focused_item_id: Some(future_item),
            ..Default::default()
        },
    )
    .await;

    let mut ids: Vec<i32> = view.displayed_items.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![past_item, future_item]);
    assert!(!ids.contains(&unrelated.id));
    assert_eq!(view.focused_item_id, Some(future_item));
    assert_eq!(view.displayed_milestones.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect category filter to narrow items only
async fn filters_by_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    insert_past_and_future(&test).await?;

    let view = view(
        &test,
        RoadmapViewParams {
            show_historical: Some(true),
            category: Some("AI".to_string()),
            ..Default::default()
        },
    )
    .await;

    assert_eq!(view.displayed_items.len(), 1);
    assert_eq!(view.displayed_items[0].title, "Someday");
    assert_eq!(view.displayed_milestones.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect 400 for an unknown category name
async fn rejects_unknown_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let params = RoadmapViewParams {
        category: Some("Marketing".to_string()),
        ..Default::default()
    };
    let result = get_view(State(test.into_app_state()), Query(params)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect every item ordered by milestone date
async fn exports_items_by_milestone_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let late = test.roadmap().insert_milestone("Late", date(2027, 1, 1)).await?;
    let early = test.roadmap().insert_milestone("Early", date(2026, 1, 1)).await?;
    test.roadmap().insert_item("Second", late.id).await?;
    test.roadmap().insert_item("First", early.id).await?;

    let resp = export(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: RoadmapExportDto = json_body(resp).await;
    assert_eq!(body.item_count, 2);
    let titles: Vec<&str> = body.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);

    Ok(())
}
