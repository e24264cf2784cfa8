pub mod item;
pub mod milestone;
pub mod relation;
