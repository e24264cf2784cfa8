pub mod acquisition;
pub mod client_count;
pub mod epic;
pub mod progress;
pub mod project;
pub mod timeline;
pub mod tracker;
