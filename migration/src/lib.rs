pub use sea_orm_migration::prelude::*;

mod m20250601_000001_roadmap_user;
mod m20250601_000002_milestone;
mod m20250601_000003_roadmap_item;
mod m20250601_000004_roadmap_item_relation;
mod m20250601_000005_acquisition;
mod m20250601_000006_project;
mod m20250601_000007_acquisition_project;
mod m20250601_000008_acquisition_progress;
mod m20250601_000009_functionality_epic;
mod m20250601_000010_acquisition_client_count;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_roadmap_user::Migration),
            Box::new(m20250601_000002_milestone::Migration),
            Box::new(m20250601_000003_roadmap_item::Migration),
            Box::new(m20250601_000004_roadmap_item_relation::Migration),
            Box::new(m20250601_000005_acquisition::Migration),
            Box::new(m20250601_000006_project::Migration),
            Box::new(m20250601_000007_acquisition_project::Migration),
            Box::new(m20250601_000008_acquisition_progress::Migration),
            Box::new(m20250601_000009_functionality_epic::Migration),
            Box::new(m20250601_000010_acquisition_client_count::Migration),
        ]
    }
}
