//! Repositories wrapping sea-orm queries.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so the same code runs
//! against the pooled connection or inside a transaction.

pub mod acquisition;
pub mod roadmap;
pub mod user;
