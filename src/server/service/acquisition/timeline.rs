//! Milestone-indexed timeline of acquisitions and their projects.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        acquisition::{
            AcquisitionDto, AcquisitionSpanDto, ProjectSpanDto, ProjectSummaryDto, SpanKind,
            TimelineAcquisitionDto, TimelineDto, TimelineProjectDto,
        },
        roadmap::{MilestoneDto, SortOrder},
    },
    server::{
        error::Error,
        service::{
            acquisition::acquisition::AcquisitionService,
            roadmap::{milestone::MilestoneService, view::sort_milestones},
        },
    },
};

/// Colors handed out by position to acquisitions without a stored color
pub static FALLBACK_PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#8b5cf6", "#f59e0b", "#f43f5e", "#06b6d4", "#6366f1", "#14b8a6",
];

/// Span of a project given the indexes of its start and end milestones
pub fn project_span(start: Option<usize>, end: Option<usize>) -> Option<ProjectSpanDto> {
    match (start, end) {
        (Some(start_index), Some(end_index)) => Some(ProjectSpanDto {
            kind: SpanKind::Range,
            start_index,
            end_index,
        }),
        (Some(index), None) => Some(ProjectSpanDto {
            kind: SpanKind::Start,
            start_index: index,
            end_index: index,
        }),
        (None, Some(index)) => Some(ProjectSpanDto {
            kind: SpanKind::End,
            start_index: index,
            end_index: index,
        }),
        (None, None) => None,
    }
}

/// Bar from the earliest project start to the latest project end
///
/// When only starts or only ends are known the bar collapses onto that side.
pub fn acquisition_span(
    starts: impl IntoIterator<Item = usize>,
    ends: impl IntoIterator<Item = usize>,
) -> Option<AcquisitionSpanDto> {
    match (starts.into_iter().min(), ends.into_iter().max()) {
        (Some(start_index), Some(end_index)) => Some(AcquisitionSpanDto {
            start_index,
            end_index,
        }),
        (Some(index), None) | (None, Some(index)) => Some(AcquisitionSpanDto {
            start_index: index,
            end_index: index,
        }),
        (None, None) => None,
    }
}

pub fn build_timeline(
    mut milestones: Vec<MilestoneDto>,
    mut acquisitions: Vec<AcquisitionDto>,
    sort: SortOrder,
) -> TimelineDto {
    sort_milestones(&mut milestones, sort);

    let milestone_index: HashMap<i32, usize> = milestones
        .iter()
        .enumerate()
        .map(|(index, milestone)| (milestone.id, index))
        .collect();
    let index_of = |id: Option<i32>| id.and_then(|id| milestone_index.get(&id).copied());

    acquisitions.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.id.cmp(&b.id))
    });

    let acquisitions = acquisitions
        .into_iter()
        .enumerate()
        .map(|(position, acquisition)| {
            let indexes: Vec<(&ProjectSummaryDto, Option<usize>, Option<usize>)> = acquisition
                .projects
                .iter()
                .map(|p| (p, index_of(p.start_milestone_id), index_of(p.end_milestone_id)))
                .collect();

            let span = acquisition_span(
                indexes.iter().filter_map(|(_, start, _)| *start),
                indexes.iter().filter_map(|(_, _, end)| *end),
            );

            let projects = indexes
                .iter()
                .map(|(project, start, end)| TimelineProjectDto {
                    id: project.id,
                    title: project.title.clone(),
                    span: project_span(*start, *end),
                })
                .collect();

            let color = acquisition
                .color
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| {
                    FALLBACK_PALETTE[position % FALLBACK_PALETTE.len()].to_string()
                });

            TimelineAcquisitionDto {
                id: acquisition.id,
                name: acquisition.name,
                color,
                span,
                projects,
            }
        })
        .collect();

    TimelineDto {
        milestones,
        acquisitions,
    }
}

pub async fn timeline_service(db: &DatabaseConnection, sort: SortOrder) -> Result<TimelineDto, Error> {
    let milestones = MilestoneService::new(db).get_all().await?;
    let acquisitions = AcquisitionService::new(db).get_all().await?;

    Ok(build_timeline(milestones, acquisitions, sort))
}
