use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use compass::{
    model::roadmap::{
        Category, CreateRoadmapItemDto, ItemStatus, RoadmapItemDto, UpdateRoadmapItemDto,
    },
    server::controller::roadmap::item::{create_item, delete_item, get_item, get_items, update_item},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::util::json_body;

fn create_payload(milestone_id: i32) -> CreateRoadmapItemDto {
    CreateRoadmapItemDto {
        title: Some("Single sign-on".to_string()),
        description: Some("SAML support".to_string()),
        date: Some("2026-02-01".to_string()),
        category: Some(Category::Product),
        status: Some(ItemStatus::Planned),
        milestone_id: Some(milestone_id),
        product_dri: Some("Dana".to_string()),
        ..Default::default()
    }
}

mod create {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the author recorded as creator and updater
    async fn creates_item_as_editor() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let user = test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;
        let other = test.roadmap().insert_item("Audit log", milestone.id).await?;

        let mut payload = create_payload(milestone.id);
        payload.related_item_ids = Some(vec![other.id]);

        let result = create_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Json(payload)),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let item: RoadmapItemDto = json_body(resp).await;
        assert_eq!(item.title, "Single sign-on");
        assert_eq!(item.milestone.id, milestone.id);
        assert_eq!(item.product_dri, "Dana");
        assert_eq!(item.created_by.as_ref().map(|u| u.id), Some(user.id));
        assert_eq!(item.updated_by.as_ref().map(|u| u.id), Some(user.id));
        assert_eq!(item.related_items.len(), 1);
        assert_eq!(item.related_items[0].id, other.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 for a viewer and no item persisted
    async fn forbids_viewer() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_viewer().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;

        let result = create_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Json(create_payload(milestone.id))),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let count = entity::prelude::RoadmapItem::find().count(&test.db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when any required field is missing
    async fn rejects_missing_required_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;

        let strip: [fn(&mut CreateRoadmapItemDto); 5] = [
            |p| p.title = None,
            |p| p.category = None,
            |p| p.status = None,
            |p| p.milestone_id = None,
            |p| p.date = None,
        ];

        for strip_field in strip {
            let mut payload = create_payload(milestone.id);
            strip_field(&mut payload);

            let result = create_item(
                State(test.into_app_state()),
                test.session.clone(),
                Ok(Json(payload)),
            )
            .await;

            let resp = result.err().unwrap().into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        let count = entity::prelude::RoadmapItem::find().count(&test.db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for an unparsable date
    async fn rejects_invalid_date() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;

        let mut payload = create_payload(milestone.id);
        payload.date = Some("soon".to_string());

        let result = create_item(
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
    /// Expect 400 for unknown milestone or related item ids
    async fn rejects_unknown_references() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;

        let unknown_milestone = create_payload(milestone.id + 100);
        let mut unknown_related = create_payload(milestone.id);
        unknown_related.related_item_ids = Some(vec![42]);

        for payload in [unknown_milestone, unknown_related] {
            let result = create_item(
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
}

mod read {
    use super::*;

    #[tokio::test]
    /// Expect items in creation order with relations in both directions
    async fn lists_items_with_relations() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;
        let first = test.roadmap().insert_item("First", milestone.id).await?;
        let second = test.roadmap().insert_item("Second", milestone.id).await?;
        test.roadmap().relate_items(first.id, second.id).await?;

        let resp = get_items(State(test.into_app_state()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let items: Vec<RoadmapItemDto> = json_body(resp).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, first.id);
        assert_eq!(items[0].related_items[0].title, "Second");
        assert_eq!(items[1].related_to[0].id, first.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown id
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result = get_item(State(test.into_app_state()), Ok(Path(1))).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update {
    use super::*;

    #[tokio::test]
    /// Expect only present keys to change, with null resetting description and DRI
    async fn applies_present_keys() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let user = test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;
        let item = test.roadmap().insert_item("Audit log", milestone.id).await?;

        let payload: UpdateRoadmapItemDto = serde_json::from_str(
            r#"{"status":"in-progress","description":null,"productDRI":null}"#,
        )?;

        let result = update_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(item.id)),
            Ok(Json(payload)),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: RoadmapItemDto = json_body(resp).await;
        assert_eq!(updated.title, "Audit log");
        assert_eq!(updated.status, ItemStatus::InProgress);
        assert_eq!(updated.description, None);
        assert_eq!(updated.product_dri, "");
        assert_eq!(updated.updated_by.map(|u| u.id), Some(user.id));

        Ok(())
    }

    #[tokio::test]
    /// Expect related item ids to replace the outgoing relations
    async fn replaces_related_items() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;
        let item = test.roadmap().insert_item("Item", milestone.id).await?;
        let old = test.roadmap().insert_item("Old", milestone.id).await?;
        let new = test.roadmap().insert_item("New", milestone.id).await?;
        test.roadmap().relate_items(item.id, old.id).await?;

        let payload = UpdateRoadmapItemDto {
            related_item_ids: Some(Some(vec![new.id])),
            ..Default::default()
        };

        let resp = update_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(item.id)),
            Ok(Json(payload)),
        )
        .await
        .unwrap()
        .into_response();

        let updated: RoadmapItemDto = json_body(resp).await;
        let related: Vec<i32> = updated.related_items.iter().map(|r| r.id).collect();
        assert_eq!(related, vec![new.id]);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when the body carries no applicable key
    async fn rejects_empty_update() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;
        let item = test.roadmap().insert_item("Item", milestone.id).await?;

        let result = update_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(item.id)),
            Ok(Json(UpdateRoadmapItemDto::default())),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown id
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;

        let payload = UpdateRoadmapItemDto {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        let result = update_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(1)),
            Ok(Json(payload)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    /// Expect 204 and relation rows removed in both directions
    async fn deletes_item_and_relations() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;
        let item = test.roadmap().insert_item("Item", milestone.id).await?;
        let other = test.roadmap().insert_item("Other", milestone.id).await?;
        test.roadmap().relate_items(item.id, other.id).await?;
        test.roadmap().relate_items(other.id, item.id).await?;

        let result = delete_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(item.id)),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let relations = entity::prelude::RoadmapItemRelation::find()
            .count(&test.db)
            .await?;
        assert_eq!(relations, 0);
        assert!(entity::prelude::RoadmapItem::find_by_id(other.id)
            .one(&test.db)
            .await?
            .is_some());

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 without a session user and the item left in place
    async fn forbids_anonymous() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let milestone = test.roadmap().insert_milestone("Q1", date(2026, 3, 31)).await?;
        let item = test.roadmap().insert_item("Item", milestone.id).await?;

        let result = delete_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(item.id)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let count = entity::prelude::RoadmapItem::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown id
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.login_editor().await?;

        let result = delete_item(
            State(test.into_app_state()),
            test.session.clone(),
            Ok(Path(1)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
