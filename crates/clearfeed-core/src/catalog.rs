//! Source and keyword catalog models.
//!
//! These back the simple list pages; the client keeps no state machine for
//! them beyond what the pages themselves hold.

use serde::{Deserialize, Serialize};

/// How a registered source is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Rss,
    Website,
}

/// A registered news source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub user_id: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub active: bool,
    pub created_at: String,
}

/// Request body for creating a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSource {
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
}

/// Partial update body for a source. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// A tracked keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub id: String,
    pub user_id: String,
    pub word: String,
    pub created_at: String,
}
