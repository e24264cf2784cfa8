//! HTTP controller endpoints for the Compass web API.
//!
//! Reads are open to everyone. Every mutation first checks the session for an editor
//! through [`util::editor::require_editor`] and only then reads the request body.

pub mod acquisition;
pub mod auth;
pub mod health;
pub mod roadmap;
pub mod util;
