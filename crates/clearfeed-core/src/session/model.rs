//! Session domain models.
//!
//! `Session` is the in-memory snapshot the rest of the client reads;
//! `StoredSession` is the persisted artifact set the vault owns.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// The client's view of the current authentication state.
///
/// `is_loading` is true only between process start and the completion of
/// the initial hydration from storage; it becomes false exactly once.
/// `onboarded` is meaningful only while `user` is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_loading: bool,
    pub onboarded: bool,
}

impl Session {
    /// The state at process start: anonymous, hydration pending.
    pub fn new() -> Self {
        Self {
            user: None,
            is_loading: true,
            onboarded: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// The four persisted session artifacts.
///
/// All four are written together on login/register and cleared together on
/// logout. Each field is optional so hydration can classify partial
/// presence: a session counts as stored only when both the user record and
/// the access credential are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
    pub onboarded: Option<bool>,
}

impl StoredSession {
    /// Whether the persisted artifacts amount to a usable session.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none()
            && self.refresh_token.is_none()
            && self.user.is_none()
            && self.onboarded.is_none()
    }
}
