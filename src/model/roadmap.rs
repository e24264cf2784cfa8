use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::double_option, user::UserSummaryDto};

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Product,
    #[serde(rename = "AI")]
    Ai,
    Integrations,
    Branding,
    Migrations,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Product,
        Category::Ai,
        Category::Integrations,
        Category::Branding,
        Category::Migrations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Ai => "AI",
            Self::Integrations => "Integrations",
            Self::Branding => "Branding",
            Self::Migrations => "Migrations",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl From<entity::sea_orm_active_enums::Category> for Category {
    fn from(category: entity::sea_orm_active_enums::Category) -> Self {
        use entity::sea_orm_active_enums::Category as Db;

        match category {
            Db::Product => Self::Product,
            Db::Ai => Self::Ai,
            Db::Integrations => Self::Integrations,
            Db::Branding => Self::Branding,
            Db::Migrations => Self::Migrations,
        }
    }
}

impl From<Category> for entity::sea_orm_active_enums::Category {
    fn from(category: Category) -> Self {
        match category {
            Category::Product => Self::Product,
            Category::Ai => Self::Ai,
            Category::Integrations => Self::Integrations,
            Category::Branding => Self::Branding,
            Category::Migrations => Self::Migrations,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Planned,
    InProgress,
    Completed,
}

impl From<entity::sea_orm_active_enums::ItemStatus> for ItemStatus {
    fn from(status: entity::sea_orm_active_enums::ItemStatus) -> Self {
        use entity::sea_orm_active_enums::ItemStatus as Db;

        match status {
            Db::Planned => Self::Planned,
            Db::InProgress => Self::InProgress,
            Db::Completed => Self::Completed,
        }
    }
}

impl From<ItemStatus> for entity::sea_orm_active_enums::ItemStatus {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Planned => Self::Planned,
            ItemStatus::InProgress => Self::InProgress,
            ItemStatus::Completed => Self::Completed,
        }
    }
}

/// Milestone sort direction, ascending by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RelevantLinkDto {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl From<entity::json::RelevantLink> for RelevantLinkDto {
    fn from(link: entity::json::RelevantLink) -> Self {
        Self {
            url: link.url,
            text: link.text,
        }
    }
}

impl From<RelevantLinkDto> for entity::json::RelevantLink {
    fn from(link: RelevantLinkDto) -> Self {
        Self {
            url: link.url,
            text: link.text,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDto {
    pub id: i32,
    pub title: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::milestone::Model> for MilestoneDto {
    fn from(milestone: entity::milestone::Model) -> Self {
        Self {
            id: milestone.id,
            title: milestone.title,
            date: milestone.date,
            created_at: milestone.created_at,
            updated_at: milestone.updated_at,
        }
    }
}

/// Request body for `POST /api/roadmap/milestones`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateMilestoneDto {
    pub title: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: Option<String>,
}

/// Request body for `PATCH /api/roadmap/milestones/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMilestoneDto {
    pub title: Option<String>,
    pub date: Option<String>,
}

/// Id and title of a roadmap item referenced by another item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemRefDto {
    pub id: i32,
    pub title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItemDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub category: Category,
    pub status: ItemStatus,
    pub milestone_id: i32,
    pub milestone: MilestoneDto,
    pub pirate_metrics: Vec<String>,
    pub north_star_metrics: Vec<String>,
    pub relevant_links: Vec<RelevantLinkDto>,
    #[serde(rename = "productDRI")]
    pub product_dri: String,
    pub created_by: Option<UserSummaryDto>,
    pub updated_by: Option<UserSummaryDto>,
    /// Items this item lists as related
    pub related_items: Vec<ItemRefDto>,
    /// Items that list this item as related
    pub related_to: Vec<ItemRefDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RoadmapItemDto {
    /// Ids of items related to this one in either direction.
    pub fn related_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.related_items
            .iter()
            .chain(self.related_to.iter())
            .map(|r| r.id)
    }
}

/// Request body for `POST /api/roadmap/items`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoadmapItemDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
    pub milestone_id: Option<i32>,
    pub pirate_metrics: Option<Vec<String>>,
    pub north_star_metrics: Option<Vec<String>>,
    pub relevant_links: Option<Vec<RelevantLinkDto>>,
    pub related_item_ids: Option<Vec<i32>>,
    #[serde(rename = "productDRI")]
    pub product_dri: Option<String>,
}

/// Request body for `PATCH /api/roadmap/items/{id}`
///
/// Only keys present in the body are applied. An explicit `null` clears
/// `description`, resets `productDRI` to an empty string and resets metric lists.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoadmapItemDto {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub date: Option<String>,
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
    pub milestone_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Vec<String>>)]
    pub pirate_metrics: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Vec<String>>)]
    pub north_star_metrics: Option<Option<Vec<String>>>,
    pub relevant_links: Option<Vec<RelevantLinkDto>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Vec<i32>>)]
    pub related_item_ids: Option<Option<Vec<i32>>>,
    #[serde(
        rename = "productDRI",
        default,
        deserialize_with = "double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub product_dri: Option<Option<String>>,
}

impl UpdateRoadmapItemDto {
    /// Whether the body carries at least one applicable change.
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.date.is_some()
            || self.category.is_some()
            || self.status.is_some()
            || self.milestone_id.is_some()
            || self.pirate_metrics.is_some()
            || self.north_star_metrics.is_some()
            || self.relevant_links.is_some()
            || self.related_item_ids.is_some()
            || self.product_dri.is_some()
    }
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RoadmapViewParams {
    /// Milestone date order, `asc` by default
    pub sort: Option<SortOrder>,
    /// Include milestones dated before today
    pub show_historical: Option<bool>,
    /// `All` or a category name
    pub category: Option<String>,
    pub milestone_id: Option<i32>,
    pub focused_item_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapViewDto {
    pub displayed_items: Vec<RoadmapItemDto>,
    pub displayed_milestones: Vec<MilestoneDto>,
    pub historical_milestone_count: usize,
    /// The focused item id, `null` when no focus was requested or the item was not found
    pub focused_item_id: Option<i32>,
    /// Category filter values, starting with `All`
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapExportDto {
    pub exported_at: NaiveDateTime,
    pub item_count: usize,
    pub items: Vec<RoadmapItemDto>,
}
