//! Fixture helpers for database records and mock HTTP endpoints.
//!
//! - `auth` - OAuth token exchange and userinfo endpoints
//! - `roadmap` - milestones, roadmap items and item relations
//! - `acquisition` - acquisitions, projects and their tracking records
//! - `user` - user records

pub mod acquisition;
pub mod auth;
pub mod roadmap;
pub mod user;
