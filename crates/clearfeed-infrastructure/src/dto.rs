//! Persistence DTOs.
//!
//! The on-disk session document is decoupled from the domain model so the
//! storage schema can evolve without touching domain types. All fields are
//! optional with serde defaults, which keeps older documents loadable.

use serde::{Deserialize, Serialize};

use clearfeed_core::session::StoredSession;
use clearfeed_core::user::{IndustryRef, Role, User};

/// On-disk form of the user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUserDoc {
    pub id: String,
    pub email: String,
    pub name: String,
    /// `"user"` or `"admin"`; unknown values degrade to `"user"`.
    pub role: String,
    #[serde(default)]
    pub onboarded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_slug: Option<String>,
}

/// On-disk form of the persisted session artifacts, written as one
/// document so the four artifacts can only appear or vanish together
/// under normal operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredSessionDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<StoredUserDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarded: Option<bool>,
    /// When the document was last written (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn role_to_str(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::User => "user",
    }
}

fn role_from_str(role: &str) -> Role {
    match role {
        "admin" => Role::Admin,
        _ => Role::User,
    }
}

impl From<&User> for StoredUserDoc {
    fn from(user: &User) -> Self {
        StoredUserDoc {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: role_to_str(user.role).to_string(),
            onboarded: user.onboarded,
            industry_id: user.industry.as_ref().map(|i| i.id.clone()),
            industry_name: user.industry.as_ref().map(|i| i.name.clone()),
            industry_slug: user.industry.as_ref().map(|i| i.slug.clone()),
        }
    }
}

impl From<StoredUserDoc> for User {
    fn from(doc: StoredUserDoc) -> Self {
        let industry = match (doc.industry_id, doc.industry_name, doc.industry_slug) {
            (Some(id), Some(name), Some(slug)) => Some(IndustryRef { id, name, slug }),
            _ => None,
        };
        User {
            id: doc.id,
            email: doc.email,
            name: doc.name,
            role: role_from_str(&doc.role),
            onboarded: doc.onboarded,
            industry,
        }
    }
}

impl From<&StoredSession> for StoredSessionDoc {
    fn from(session: &StoredSession) -> Self {
        StoredSessionDoc {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            user: session.user.as_ref().map(StoredUserDoc::from),
            onboarded: session.onboarded,
            updated_at: None,
        }
    }
}

impl From<StoredSessionDoc> for StoredSession {
    fn from(doc: StoredSessionDoc) -> Self {
        StoredSession {
            access_token: doc.access_token,
            refresh_token: doc.refresh_token,
            user: doc.user.map(User::from),
            onboarded: doc.onboarded,
        }
    }
}
