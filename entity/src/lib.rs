pub mod prelude;

pub mod acquisition;
pub mod acquisition_client_count;
pub mod acquisition_progress;
pub mod acquisition_project;
pub mod functionality_epic;
pub mod json;
pub mod milestone;
pub mod project;
pub mod roadmap_item;
pub mod roadmap_item_relation;
pub mod roadmap_user;
pub mod sea_orm_active_enums;
