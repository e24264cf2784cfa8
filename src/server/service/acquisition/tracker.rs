//! Integration progress summary per acquisition.

use sea_orm::DatabaseConnection;

use crate::{
    model::acquisition::{
        AcquisitionDto, AcquisitionProgressDto, AcquisitionRefDto, ProgressSummaryDto,
        StepStatus, TrackerEntryDto,
    },
    server::{error::Error, service::acquisition::acquisition::AcquisitionService},
};

/// Rounded share of `part` in `total`, clamped to 0..=100, 0 when `total` is not positive
fn percent(part: i64, total: i64) -> u32 {
    if total <= 0 {
        return 0;
    }

    let share = (part.max(0) as f64 / total as f64 * 100.0).round();

    share.min(100.0) as u32
}

pub fn summarize_progress(progress: &AcquisitionProgressDto) -> ProgressSummaryDto {
    // Negative counters predating validation count as zero
    let to_do = i64::from(progress.functionality_epics_to_do.max(0));
    let in_progress = i64::from(progress.functionality_epics_in_progress.max(0));
    let complete = i64::from(progress.functionality_epics_complete.max(0));
    let epics_total = to_do + in_progress + complete;

    let epics_complete_percent = percent(complete, epics_total);
    let epics_in_progress_percent = percent(in_progress, epics_total);
    let epics_to_do_percent = percent(to_do, epics_total);

    let functionality_status = if epics_complete_percent == 100 {
        StepStatus::Complete
    } else if epics_complete_percent > 0 || epics_in_progress_percent > 0 {
        StepStatus::InProgress
    } else {
        StepStatus::NotStarted
    };

    let client_total = i64::from(progress.client_count_total);
    let client_access_percent = percent(i64::from(progress.client_access_count), client_total);
    let client_active_percent = percent(i64::from(progress.client_active_count), client_total);

    let dev_platform_percent = if progress.dev_platform { 100.0 } else { 0.0 };
    let technical_percent = (dev_platform_percent + f64::from(epics_complete_percent)) / 2.0;
    let client_percent =
        (f64::from(client_access_percent) + f64::from(client_active_percent)) / 2.0;
    let overall_percent = ((technical_percent + client_percent) / 2.0).round() as u32;

    ProgressSummaryDto {
        dev_platform: progress.dev_platform,
        epics_total,
        epics_complete_percent,
        epics_in_progress_percent,
        epics_to_do_percent,
        functionality_status,
        client_access_percent,
        client_access_status: StepStatus::from_percent(client_access_percent),
        client_active_percent,
        client_active_status: StepStatus::from_percent(client_active_percent),
        technical_percent,
        client_percent,
        overall_percent,
    }
}

/// One entry per acquisition ordered by name, `summary` is `None` without a progress record
pub fn build_tracker(mut acquisitions: Vec<AcquisitionDto>) -> Vec<TrackerEntryDto> {
    acquisitions.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.id.cmp(&b.id))
    });

    acquisitions
        .into_iter()
        .map(|acquisition| TrackerEntryDto {
            disposition: acquisition.progress.as_ref().and_then(|p| p.disposition),
            summary: acquisition.progress.as_ref().map(summarize_progress),
            acquisition: AcquisitionRefDto {
                id: acquisition.id,
                name: acquisition.name,
                color: acquisition.color,
            },
        })
        .collect()
}

pub async fn tracker_service(db: &DatabaseConnection) -> Result<Vec<TrackerEntryDto>, Error> {
    let acquisitions = AcquisitionService::new(db).get_all().await?;

    Ok(build_tracker(acquisitions))
}
