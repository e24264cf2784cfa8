//! Server-side models: application state, OAuth settings and session wrappers.

pub mod app;
pub mod auth;
pub mod session;
