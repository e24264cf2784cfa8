use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{
    api::double_option,
    roadmap::{MilestoneDto, RelevantLinkDto, SortOrder},
};

/// How an acquired product is handled after integration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Disposition {
    Standalone,
    Wrapped,
    Deprecating,
}

impl From<entity::sea_orm_active_enums::Disposition> for Disposition {
    fn from(disposition: entity::sea_orm_active_enums::Disposition) -> Self {
        use entity::sea_orm_active_enums::Disposition as Db;

        match disposition {
            Db::Standalone => Self::Standalone,
            Db::Wrapped => Self::Wrapped,
            Db::Deprecating => Self::Deprecating,
        }
    }
}

impl From<Disposition> for entity::sea_orm_active_enums::Disposition {
    fn from(disposition: Disposition) -> Self {
        match disposition {
            Disposition::Standalone => Self::Standalone,
            Disposition::Wrapped => Self::Wrapped,
            Disposition::Deprecating => Self::Deprecating,
        }
    }
}

/// Id, name and color of an acquisition referenced from another resource
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AcquisitionRefDto {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
}

impl From<entity::acquisition::Model> for AcquisitionRefDto {
    fn from(acquisition: entity::acquisition::Model) -> Self {
        Self {
            id: acquisition.id,
            name: acquisition.name,
            color: acquisition.color,
        }
    }
}

/// A project with its resolved start and end milestones
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub relevant_links: Vec<RelevantLinkDto>,
    pub start_milestone_id: Option<i32>,
    pub end_milestone_id: Option<i32>,
    pub start_milestone: Option<MilestoneDto>,
    pub end_milestone: Option<MilestoneDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A project together with the acquisitions it belongs to
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(flatten)]
    pub project: ProjectSummaryDto,
    pub acquisitions: Vec<AcquisitionRefDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionProgressDto {
    pub id: i32,
    pub acquisition_id: i32,
    pub disposition: Option<Disposition>,
    pub dev_platform: bool,
    pub functionality_epics_to_do: i32,
    pub functionality_epics_in_progress: i32,
    pub functionality_epics_complete: i32,
    pub client_count_total: i32,
    pub client_access_count: i32,
    pub client_active_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::acquisition_progress::Model> for AcquisitionProgressDto {
    fn from(progress: entity::acquisition_progress::Model) -> Self {
        Self {
            id: progress.id,
            acquisition_id: progress.acquisition_id,
            disposition: progress.disposition.map(Disposition::from),
            dev_platform: progress.dev_platform,
            functionality_epics_to_do: progress.functionality_epics_to_do,
            functionality_epics_in_progress: progress.functionality_epics_in_progress,
            functionality_epics_complete: progress.functionality_epics_complete,
            client_count_total: progress.client_count_total,
            client_access_count: progress.client_access_count,
            client_active_count: progress.client_active_count,
            created_at: progress.created_at,
            updated_at: progress.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalityEpicDto {
    pub id: i32,
    pub acquisition_id: i32,
    pub epic_id: String,
    pub epic_name: String,
    pub epic_status: Option<String>,
    pub epic_acquired_company: Option<String>,
    pub epic_link: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::functionality_epic::Model> for FunctionalityEpicDto {
    fn from(epic: entity::functionality_epic::Model) -> Self {
        Self {
            id: epic.id,
            acquisition_id: epic.acquisition_id,
            epic_id: epic.epic_id,
            epic_name: epic.epic_name,
            epic_status: epic.epic_status,
            epic_acquired_company: epic.epic_acquired_company,
            epic_link: epic.epic_link,
            created_at: epic.created_at,
            updated_at: epic.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientCountDto {
    pub id: i32,
    pub acquisition_id: i32,
    pub client_vitally_id: String,
    pub org_id: Option<String>,
    pub client_name: String,
    pub active_in_console: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::acquisition_client_count::Model> for ClientCountDto {
    fn from(client: entity::acquisition_client_count::Model) -> Self {
        Self {
            id: client.id,
            acquisition_id: client.acquisition_id,
            client_vitally_id: client.client_vitally_id,
            org_id: client.org_id,
            client_name: client.client_name,
            active_in_console: client.active_in_console,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub integration_overview: Option<String>,
    pub color: Option<String>,
    pub projects: Vec<ProjectSummaryDto>,
    pub progress: Option<AcquisitionProgressDto>,
    pub epics: Vec<FunctionalityEpicDto>,
    pub client_counts: Vec<ClientCountDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for `POST /api/acquisitions`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcquisitionDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub integration_overview: Option<String>,
    pub color: Option<String>,
}

/// Request body for `PATCH /api/acquisitions/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcquisitionDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub integration_overview: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub color: Option<Option<String>>,
}

/// Request body for `POST /api/projects`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub relevant_links: Option<Vec<RelevantLinkDto>>,
    pub start_milestone_id: Option<i32>,
    pub end_milestone_id: Option<i32>,
    pub acquisition_ids: Option<Vec<i32>>,
}

/// Request body for `PATCH /api/projects/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Vec<RelevantLinkDto>>)]
    pub relevant_links: Option<Option<Vec<RelevantLinkDto>>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub start_milestone_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub end_milestone_id: Option<Option<i32>>,
    /// Replaces the linked acquisitions, must not be empty
    pub acquisition_ids: Option<Vec<i32>>,
}

/// Request body for `POST /api/acquisition-progress`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcquisitionProgressDto {
    pub acquisition_id: Option<i32>,
    pub disposition: Option<Disposition>,
    pub dev_platform: Option<bool>,
    pub functionality_epics_to_do: Option<i32>,
    pub functionality_epics_in_progress: Option<i32>,
    pub functionality_epics_complete: Option<i32>,
    pub client_count_total: Option<i32>,
    pub client_access_count: Option<i32>,
    pub client_active_count: Option<i32>,
}

/// Request body for `PATCH /api/acquisition-progress/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcquisitionProgressDto {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Disposition>)]
    pub disposition: Option<Option<Disposition>>,
    pub dev_platform: Option<bool>,
    pub functionality_epics_to_do: Option<i32>,
    pub functionality_epics_in_progress: Option<i32>,
    pub functionality_epics_complete: Option<i32>,
    pub client_count_total: Option<i32>,
    pub client_access_count: Option<i32>,
    pub client_active_count: Option<i32>,
}

/// Request body for `POST /api/functionality-epics`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFunctionalityEpicDto {
    pub acquisition_id: Option<i32>,
    pub epic_id: Option<String>,
    pub epic_name: Option<String>,
    pub epic_status: Option<String>,
    pub epic_acquired_company: Option<String>,
    pub epic_link: Option<String>,
}

/// Request body for `PATCH /api/functionality-epics/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFunctionalityEpicDto {
    pub epic_id: Option<String>,
    pub epic_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub epic_status: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub epic_acquired_company: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub epic_link: Option<Option<String>>,
}

/// Request body for `POST /api/acquisition-client-counts`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientCountDto {
    pub acquisition_id: Option<i32>,
    pub client_vitally_id: Option<String>,
    pub org_id: Option<String>,
    pub client_name: Option<String>,
    pub active_in_console: Option<bool>,
}

/// Request body for `PATCH /api/acquisition-client-counts/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientCountDto {
    pub client_vitally_id: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub org_id: Option<Option<String>>,
    pub client_name: Option<String>,
    pub active_in_console: Option<bool>,
}

/// Optional filter shared by the per-acquisition list endpoints
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AcquisitionFilterParams {
    pub acquisition_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimelineParams {
    /// Milestone date order, `asc` by default
    pub sort: Option<SortOrder>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Bar from the start milestone to the end milestone
    Range,
    /// Point marker at the start milestone only
    Start,
    /// Point marker at the end milestone only
    End,
}

/// Position of a project on the milestone axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpanDto {
    pub kind: SpanKind,
    pub start_index: usize,
    pub end_index: usize,
}

/// Bar covering every project of an acquisition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionSpanDto {
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineProjectDto {
    pub id: i32,
    pub title: String,
    pub span: Option<ProjectSpanDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineAcquisitionDto {
    pub id: i32,
    pub name: String,
    /// Stored color, or a palette color when none is stored
    pub color: String,
    pub span: Option<AcquisitionSpanDto>,
    pub projects: Vec<TimelineProjectDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDto {
    /// Sorted milestones, span indexes point into this list
    pub milestones: Vec<MilestoneDto>,
    pub acquisitions: Vec<TimelineAcquisitionDto>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Complete,
    InProgress,
    NotStarted,
}

impl StepStatus {
    /// Status of a single-percentage step.
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            100.. => Self::Complete,
            0 => Self::NotStarted,
            _ => Self::InProgress,
        }
    }
}

/// Integration progress derived from an acquisition's progress counters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummaryDto {
    pub dev_platform: bool,
    pub epics_total: i64,
    pub epics_complete_percent: u32,
    pub epics_in_progress_percent: u32,
    pub epics_to_do_percent: u32,
    pub functionality_status: StepStatus,
    pub client_access_percent: u32,
    pub client_access_status: StepStatus,
    pub client_active_percent: u32,
    pub client_active_status: StepStatus,
    pub technical_percent: f64,
    pub client_percent: f64,
    pub overall_percent: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackerEntryDto {
    pub acquisition: AcquisitionRefDto,
    pub disposition: Option<Disposition>,
    /// `null` when the acquisition has no progress record
    pub summary: Option<ProgressSummaryDto>,
}
