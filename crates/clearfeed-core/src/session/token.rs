//! Shared access-token handle.
//!
//! The HTTP client reads the bearer token from here on every request and
//! the session service writes it on login/register/logout/hydrate, so the
//! two never need to depend on each other directly.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Cheaply clonable handle to the current access credential.
#[derive(Clone, Default)]
pub struct AccessTokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl AccessTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current token, if a session is established.
    pub async fn get(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// Replaces the current token.
    pub async fn set(&self, token: Option<String>) {
        *self.inner.write().await = token;
    }

    /// Drops the current token.
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_clear() {
        let store = AccessTokenStore::new();
        assert_eq!(store.get().await, None);

        store.set(Some("tok".to_string())).await;
        assert_eq!(store.get().await, Some("tok".to_string()));

        // Clones observe the same credential
        let other = store.clone();
        assert_eq!(other.get().await, Some("tok".to_string()));

        store.clear().await;
        assert_eq!(other.get().await, None);
    }
}
