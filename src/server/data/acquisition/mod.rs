pub mod acquisition;
pub mod client_count;
pub mod epic;
pub mod link;
pub mod progress;
pub mod project;
