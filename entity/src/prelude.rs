pub use super::acquisition::Entity as Acquisition;
pub use super::acquisition_client_count::Entity as AcquisitionClientCount;
pub use super::acquisition_progress::Entity as AcquisitionProgress;
pub use super::acquisition_project::Entity as AcquisitionProject;
pub use super::functionality_epic::Entity as FunctionalityEpic;
pub use super::milestone::Entity as Milestone;
pub use super::project::Entity as Project;
pub use super::roadmap_item::Entity as RoadmapItem;
pub use super::roadmap_item_relation::Entity as RoadmapItemRelation;
pub use super::roadmap_user::Entity as RoadmapUser;
