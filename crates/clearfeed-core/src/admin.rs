//! Admin view models.

use serde::{Deserialize, Serialize};

use crate::user::Role;

/// One account row in the admin user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
    pub sources_count: u64,
    pub keywords_count: u64,
}

/// Platform-wide counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_sources: u64,
    pub total_keywords: u64,
    pub total_articles: u64,
    pub total_matched: u64,
}
