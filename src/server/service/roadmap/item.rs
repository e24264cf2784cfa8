use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        roadmap::{
            CreateRoadmapItemDto, ItemRefDto, MilestoneDto, RoadmapItemDto, UpdateRoadmapItemDto,
        },
        user::UserSummaryDto,
    },
    server::{
        data::{
            roadmap::{
                item::{CreateRoadmapItemParams, RoadmapItemChanges, RoadmapItemRepository},
                milestone::MilestoneRepository,
                relation::RoadmapItemRelationRepository,
            },
            user::UserRepository,
        },
        error::{validation::ValidationError, Error},
        util::time::parse_date,
    },
};

pub struct RoadmapItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoadmapItemService<'a> {
    /// Creates a new instance of [`RoadmapItemService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every roadmap item in creation order with milestone, authors and relations
    pub async fn get_all(&self) -> Result<Vec<RoadmapItemDto>, Error> {
        let items = RoadmapItemRepository::new(self.db).get_all().await?;

        Ok(assemble_items(self.db, items).await?)
    }

    pub async fn get(&self, item_id: i32) -> Result<Option<RoadmapItemDto>, Error> {
        let Some(item) = RoadmapItemRepository::new(self.db).get(item_id).await? else {
            return Ok(None);
        };

        Ok(assemble_items(self.db, vec![item]).await?.into_iter().next())
    }

    /// Creates a roadmap item authored by `user_id`
    ///
    /// # Returns
    /// - `Ok(RoadmapItemDto)` - The created item
    /// - `Err(Error::ValidationError)` - A required field is missing or empty, the date does not
    ///   parse, or the milestone or a related item does not exist
    /// - `Err(Error::DbErr)` - Database failure, nothing is persisted
    pub async fn create(
        &self,
        payload: CreateRoadmapItemDto,
        user_id: i32,
    ) -> Result<RoadmapItemDto, Error> {
        let (Some(title), Some(category), Some(status), Some(milestone_id), Some(date)) = (
            non_empty(payload.title),
            payload.category,
            payload.status,
            payload.milestone_id,
            non_empty(payload.date),
        ) else {
            return Err(ValidationError::MissingRequiredFields.into());
        };

        let date = parse_date(&date)?;
        self.ensure_milestone(milestone_id).await?;

        let related_item_ids = payload.related_item_ids.unwrap_or_default();
        self.ensure_related_items(&related_item_ids).await?;

        let txn = self.db.begin().await?;

        let item = RoadmapItemRepository::new(&txn)
            .create(CreateRoadmapItemParams {
                title,
                description: payload.description,
                date,
                category: category.into(),
                status: status.into(),
                milestone_id,
                pirate_metrics: payload.pirate_metrics.unwrap_or_default(),
                north_star_metrics: payload.north_star_metrics.unwrap_or_default(),
                relevant_links: payload
                    .relevant_links
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect(),
                product_dri: payload.product_dri.unwrap_or_default(),
                created_by_id: Some(user_id),
            })
            .await?;

        if !related_item_ids.is_empty() {
            RoadmapItemRelationRepository::new(&txn)
                .replace_outgoing(item.id, &related_item_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(item_id = %item.id, user_id = %user_id, "Created roadmap item");

        let item_id = item.id;
        assemble_items(self.db, vec![item])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbErr::RecordNotFound(format!("roadmap item {}", item_id)).into())
    }

    /// Applies the keys present in `payload`, recording `user_id` as the last updater
    ///
    /// Returns `Ok(None)` when the item does not exist.
    pub async fn update(
        &self,
        item_id: i32,
        payload: UpdateRoadmapItemDto,
        user_id: i32,
    ) -> Result<Option<RoadmapItemDto>, Error> {
        if !payload.has_changes() {
            return Err(ValidationError::EmptyUpdate.into());
        }

        if RoadmapItemRepository::new(self.db)
            .get(item_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        if let Some(title) = &payload.title {
            if title.trim().is_empty() {
                return Err(ValidationError::EmptyField("title").into());
            }
        }

        let date = match &payload.date {
            Some(date) => Some(parse_date(date)?),
            None => None,
        };

        if let Some(milestone_id) = payload.milestone_id {
            self.ensure_milestone(milestone_id).await?;
        }

        let related_item_ids = payload
            .related_item_ids
            .map(|ids| ids.unwrap_or_default());
        if let Some(ids) = &related_item_ids {
            self.ensure_related_items(ids).await?;
        }

        let changes = RoadmapItemChanges {
            title: payload.title,
            description: payload.description,
            date,
            category: payload.category.map(Into::into),
            status: payload.status.map(Into::into),
            milestone_id: payload.milestone_id,
            pirate_metrics: payload.pirate_metrics.map(|m| m.unwrap_or_default()),
            north_star_metrics: payload.north_star_metrics.map(|m| m.unwrap_or_default()),
            relevant_links: payload
                .relevant_links
                .map(|links| links.into_iter().map(Into::into).collect()),
            product_dri: payload.product_dri.map(|dri| dri.unwrap_or_default()),
            updated_by_id: Some(user_id),
        };

        let txn = self.db.begin().await?;

        let Some(item) = RoadmapItemRepository::new(&txn)
            .update(item_id, changes)
            .await?
        else {
            return Ok(None);
        };

        if let Some(ids) = related_item_ids {
            RoadmapItemRelationRepository::new(&txn)
                .replace_outgoing(item.id, &ids)
                .await?;
        }

        txn.commit().await?;

        Ok(assemble_items(self.db, vec![item]).await?.into_iter().next())
    }

    /// Deletes the item and every relation row referencing it
    ///
    /// Returns `Ok(false)` when the item does not exist.
    pub async fn delete(&self, item_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        RoadmapItemRelationRepository::new(&txn)
            .delete_for_item(item_id)
            .await?;
        let result = RoadmapItemRepository::new(&txn).delete(item_id).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn ensure_milestone(&self, milestone_id: i32) -> Result<(), Error> {
        match MilestoneRepository::new(self.db).get(milestone_id).await? {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownMilestone(milestone_id).into()),
        }
    }

    async fn ensure_related_items(&self, item_ids: &[i32]) -> Result<(), Error> {
        let existing = RoadmapItemRepository::new(self.db)
            .find_existing_ids(item_ids)
            .await?;

        let mut missing: Vec<i32> = item_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        missing.sort_unstable();
        missing.dedup();

        Err(ValidationError::UnknownRelatedItems(missing).into())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolves milestones, authors and relations for `items`, keeping their order
///
/// Items whose milestone cannot be found are skipped.
pub async fn assemble_items<C: ConnectionTrait>(
    db: &C,
    items: Vec<entity::roadmap_item::Model>,
) -> Result<Vec<RoadmapItemDto>, DbErr> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let item_ids: Vec<i32> = items.iter().map(|i| i.id).collect();

    let mut milestone_ids: Vec<i32> = items.iter().map(|i| i.milestone_id).collect();
    milestone_ids.sort_unstable();
    milestone_ids.dedup();
    let milestones: HashMap<i32, MilestoneDto> = MilestoneRepository::new(db)
        .get_many(&milestone_ids)
        .await?
        .into_iter()
        .map(|m| (m.id, MilestoneDto::from(m)))
        .collect();

    let mut user_ids: Vec<i32> = items
        .iter()
        .flat_map(|i| [i.created_by_id, i.updated_by_id])
        .flatten()
        .collect();
    user_ids.sort_unstable();
    user_ids.dedup();
    let users: HashMap<i32, UserSummaryDto> = UserRepository::new(db)
        .get_many(&user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, UserSummaryDto::from(u)))
        .collect();

    let relations = RoadmapItemRelationRepository::new(db)
        .get_for_items(&item_ids)
        .await?;

    let mut titles: HashMap<i32, String> =
        items.iter().map(|i| (i.id, i.title.clone())).collect();
    let mut unknown: Vec<i32> = relations
        .iter()
        .flat_map(|r| [r.from_item_id, r.to_item_id])
        .filter(|id| !titles.contains_key(id))
        .collect();
    unknown.sort_unstable();
    unknown.dedup();
    if !unknown.is_empty() {
        for item in RoadmapItemRepository::new(db).get_many(&unknown).await? {
            titles.insert(item.id, item.title);
        }
    }

    let item_ref = |id: i32| {
        titles.get(&id).map(|title| ItemRefDto {
            id,
            title: title.clone(),
        })
    };

    let mut related_items: HashMap<i32, Vec<ItemRefDto>> = HashMap::new();
    let mut related_to: HashMap<i32, Vec<ItemRefDto>> = HashMap::new();
    for relation in &relations {
        if let Some(to) = item_ref(relation.to_item_id) {
            related_items
                .entry(relation.from_item_id)
                .or_default()
                .push(to);
        }
        if let Some(from) = item_ref(relation.from_item_id) {
            related_to.entry(relation.to_item_id).or_default().push(from);
        }
    }

    let mut dtos = Vec::with_capacity(items.len());
    for item in items {
        let Some(milestone) = milestones.get(&item.milestone_id).cloned() else {
            tracing::warn!(
                item_id = %item.id,
                milestone_id = %item.milestone_id,
                "Skipping roadmap item referencing a missing milestone"
            );
            continue;
        };

        let mut outgoing = related_items.remove(&item.id).unwrap_or_default();
        outgoing.sort_by_key(|r| r.id);
        let mut incoming = related_to.remove(&item.id).unwrap_or_default();
        incoming.sort_by_key(|r| r.id);

        dtos.push(RoadmapItemDto {
            id: item.id,
            title: item.title,
            description: item.description,
            date: item.date,
            category: item.category.into(),
            status: item.status.into(),
            milestone_id: item.milestone_id,
            milestone,
            pirate_metrics: item.pirate_metrics.0,
            north_star_metrics: item.north_star_metrics.0,
            relevant_links: item.relevant_links.0.into_iter().map(Into::into).collect(),
            product_dri: item.product_dri,
            created_by: item.created_by_id.and_then(|id| users.get(&id).cloned()),
            updated_by: item.updated_by_id.and_then(|id| users.get(&id).cloned()),
            related_items: outgoing,
            related_to: incoming,
            created_at: item.created_at,
            updated_at: item.updated_at,
        });
    }

    Ok(dtos)
}
