//! Request and response bodies exchanged over the JSON API.

pub mod acquisition;
pub mod api;
pub mod roadmap;
pub mod user;
