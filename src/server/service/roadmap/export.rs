use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::roadmap::{RoadmapExportDto, RoadmapItemDto},
    server::{error::Error, service::roadmap::item::RoadmapItemService},
};

/// Orders items by milestone date, then item id
pub fn sort_for_export(items: &mut [RoadmapItemDto]) {
    items.sort_by(|a, b| {
        a.milestone
            .date
            .cmp(&b.milestone.date)
            .then(a.id.cmp(&b.id))
    });
}

/// Snapshot of every roadmap item with its milestone and relations
pub async fn export_service(db: &DatabaseConnection) -> Result<RoadmapExportDto, Error> {
    let mut items = RoadmapItemService::new(db).get_all().await?;
    sort_for_export(&mut items);

    tracing::info!(item_count = %items.len(), "Exported roadmap");

    Ok(RoadmapExportDto {
        exported_at: Utc::now().naive_utc(),
        item_count: items.len(),
        items,
    })
}
