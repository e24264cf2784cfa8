//! Acquisitions, their integration projects and per-acquisition tracking records.

pub mod acquisition;
pub mod client_count;
pub mod epic;
pub mod progress;
pub mod project;

pub static ACQUISITION_TAG: &str = "acquisition";
