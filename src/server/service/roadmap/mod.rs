pub mod export;
pub mod item;
pub mod milestone;
pub mod view;
