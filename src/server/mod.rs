//! Server application core modules.
//!
//! Contains the HTTP routing, OAuth login flow, role checks, database repositories and the
//! services deriving roadmap views, acquisition timelines and integration progress.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
