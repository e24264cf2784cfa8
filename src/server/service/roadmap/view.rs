//! Derived roadmap view.
//!
//! [`derive_view`] is pure: it takes every item and milestone plus the view options and
//! the current date, and decides which milestones and items are displayed.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::roadmap::{
        Category, MilestoneDto, RoadmapItemDto, RoadmapViewDto, RoadmapViewParams, SortOrder,
        ALL_CATEGORIES,
    },
    server::{
        error::{validation::ValidationError, Error},
        service::roadmap::{item::RoadmapItemService, milestone::MilestoneService},
    },
};

#[derive(Clone, Debug, Default)]
pub struct ViewOptions {
    pub sort: SortOrder,
    pub show_historical: bool,
    /// `None` shows every category
    pub category: Option<Category>,
    pub milestone_id: Option<i32>,
    pub focused_item_id: Option<i32>,
}

impl ViewOptions {
    /// Resolves query parameters, rejecting category names that are neither `All` nor known
    pub fn from_params(params: RoadmapViewParams) -> Result<Self, Error> {
        let category = match params.category.as_deref() {
            None | Some(ALL_CATEGORIES) => None,
            Some(name) => Some(
                Category::parse(name)
                    .ok_or_else(|| ValidationError::InvalidCategory(name.to_string()))?,
            ),
        };

        Ok(Self {
            sort: params.sort.unwrap_or_default(),
            show_historical: params.show_historical.unwrap_or(false),
            category,
            milestone_id: params.milestone_id,
            focused_item_id: params.focused_item_id,
        })
    }
}

/// Category filter values offered to clients, `All` first
pub fn category_options() -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(Category::ALL.iter().map(|c| c.as_str().to_string()))
        .collect()
}

pub fn sort_milestones(milestones: &mut [MilestoneDto], sort: SortOrder) {
    milestones.sort_by(|a, b| match sort {
        SortOrder::Asc => a.date.cmp(&b.date).then(a.id.cmp(&b.id)),
        SortOrder::Desc => b.date.cmp(&a.date).then(b.id.cmp(&a.id)),
    });
}

/// Derives the displayed milestones and items.
///
/// Without focus, milestones dated before `today` are hidden unless historical milestones
/// are requested and items follow their milestone. With a focused item, the view shows
/// the item and its relations in both directions along with their milestones, history
/// ignored. A focused id that matches no item is dropped.
///
/// Category and milestone filters narrow the displayed items only.
pub fn derive_view(
    items: Vec<RoadmapItemDto>,
    mut milestones: Vec<MilestoneDto>,
    options: &ViewOptions,
    today: NaiveDate,
) -> RoadmapViewDto {
    sort_milestones(&mut milestones, options.sort);
    let total_milestones = milestones.len();

    let focused = options
        .focused_item_id
        .and_then(|id| items.iter().find(|item| item.id == id));

    if options.focused_item_id.is_some() && focused.is_none() {
        tracing::warn!(
            focused_item_id = ?options.focused_item_id,
            "Focused roadmap item not found, clearing focus"
        );
    }

    let (displayed_items, displayed_milestones, historical_milestone_count, focused_item_id) =
        match focused {
            Some(focused) => {
                let related: HashSet<i32> = std::iter::once(focused.id)
                    .chain(focused.related_ids())
                    .collect();
                let focused_id = focused.id;

                let displayed_items: Vec<RoadmapItemDto> = items
                    .into_iter()
                    .filter(|item| related.contains(&item.id))
                    .collect();
                let milestone_ids: HashSet<i32> =
                    displayed_items.iter().map(|item| item.milestone_id).collect();
                let displayed_milestones: Vec<MilestoneDto> = milestones
                    .into_iter()
                    .filter(|m| milestone_ids.contains(&m.id))
                    .collect();

                (displayed_items, displayed_milestones, 0, Some(focused_id))
            }
            None => {
                let displayed_milestones: Vec<MilestoneDto> = milestones
                    .into_iter()
                    .filter(|m| options.show_historical || m.date.date() >= today)
                    .collect();
                let historical = total_milestones - displayed_milestones.len();

                let milestone_ids: HashSet<i32> =
                    displayed_milestones.iter().map(|m| m.id).collect();
                let displayed_items: Vec<RoadmapItemDto> = items
                    .into_iter()
                    .filter(|item| milestone_ids.contains(&item.milestone_id))
                    .collect();

                (displayed_items, displayed_milestones, historical, None)
            }
        };

    let displayed_items = displayed_items
        .into_iter()
        .filter(|item| options.category.is_none_or(|c| item.category == c))
        .filter(|item| options.milestone_id.is_none_or(|id| item.milestone_id == id))
        .collect();

    RoadmapViewDto {
        displayed_items,
        displayed_milestones,
        historical_milestone_count,
        focused_item_id,
        categories: category_options(),
    }
}

pub struct RoadmapViewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoadmapViewService<'a> {
    /// Creates a new instance of [`RoadmapViewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every item and milestone and derives the view for today (UTC)
    pub async fn view(&self, params: RoadmapViewParams) -> Result<RoadmapViewDto, Error> {
        let options = ViewOptions::from_params(params)?;

        let items = RoadmapItemService::new(self.db).get_all().await?;
        let milestones = MilestoneService::new(self.db).get_all().await?;

        Ok(derive_view(
            items,
            milestones,
            &options,
            Utc::now().date_naive(),
        ))
    }
}
