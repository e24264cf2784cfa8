//! JSON column payloads.
//!
//! Lists are stored as JSON so the schema stays portable between Postgres in production
//! and SQLite in tests.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A plain list of strings, used for pirate and north star metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

/// A link with optional display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevantLink {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RelevantLinks(pub Vec<RelevantLink>);
