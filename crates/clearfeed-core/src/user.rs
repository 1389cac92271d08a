//! User domain model.
//!
//! Represents the authenticated account as returned by the backend's
//! auth endpoints and persisted in the local session vault.

use serde::{Deserialize, Serialize};

/// Account role as asserted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Compact industry reference carried on the user record and in
/// onboarding responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// The authenticated user record.
///
/// `onboarded` mirrors the server-asserted flag; the client never infers
/// it from other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub onboarded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<IndustryRef>,
}

impl User {
    /// Whether this user may access admin-only operations.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Response payload of the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}
