//! Roadmap items, milestones and the derived roadmap view.

pub mod item;
pub mod milestone;
pub mod view;

pub static ROADMAP_TAG: &str = "roadmap";
