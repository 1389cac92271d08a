//! Admin operations with a client-side role check.
//!
//! The server is the authority on authorization; the client check here is
//! additive and keeps unauthorized requests off the wire entirely.

use std::sync::Arc;

use clearfeed_core::admin::{AdminStats, AdminUser};
use clearfeed_core::api::AdminApi;
use clearfeed_core::error::{ClearfeedError, Result};
use clearfeed_core::feed::DigestAllResult;

use crate::session_service::SessionService;

/// Admin-only operations, gated on the current session's role.
pub struct AdminService {
    api: Arc<dyn AdminApi>,
    session: Arc<SessionService>,
}

impl AdminService {
    pub fn new(api: Arc<dyn AdminApi>, session: Arc<SessionService>) -> Self {
        Self { api, session }
    }

    /// Lists all accounts with their source/keyword counts.
    pub async fn users(&self) -> Result<Vec<AdminUser>> {
        self.require_admin().await?;
        self.api.admin_users().await
    }

    /// Platform-wide counters.
    pub async fn stats(&self) -> Result<AdminStats> {
        self.require_admin().await?;
        self.api.admin_stats().await
    }

    /// Runs the digest for every account.
    pub async fn run_all_digests(&self) -> Result<DigestAllResult> {
        self.require_admin().await?;
        self.api.run_all_digests().await
    }

    async fn require_admin(&self) -> Result<()> {
        let session = self.session.snapshot().await;
        match session.user {
            Some(user) if user.is_admin() => Ok(()),
            Some(_) => Err(ClearfeedError::unauthorized("Administrator role required")),
            None => Err(ClearfeedError::unauthorized("Not signed in")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use clearfeed_core::api::AuthApi;
    use clearfeed_core::session::{AccessTokenStore, SessionVault, StoredSession};
    use clearfeed_core::user::{AuthResponse, Role, User};

    struct MemoryVault {
        stored: Mutex<StoredSession>,
    }

    #[async_trait::async_trait]
    impl SessionVault for MemoryVault {
        async fn load(&self) -> Result<StoredSession> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn store(&self, session: &StoredSession) -> Result<()> {
            *self.stored.lock().unwrap() = session.clone();
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.stored.lock().unwrap() = StoredSession::default();
            Ok(())
        }
    }

    struct NoAuthApi;

    #[async_trait::async_trait]
    impl AuthApi for NoAuthApi {
        async fn login(&self, _: &str, _: &str) -> Result<AuthResponse> {
            Err(ClearfeedError::internal("unexpected auth call"))
        }

        async fn register(&self, _: &str, _: &str, _: &str) -> Result<AuthResponse> {
            Err(ClearfeedError::internal("unexpected auth call"))
        }
    }

    #[derive(Default)]
    struct CountingAdminApi {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl AdminApi for CountingAdminApi {
        async fn admin_users(&self) -> Result<Vec<AdminUser>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn admin_stats(&self) -> Result<AdminStats> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AdminStats::default())
        }

        async fn run_all_digests(&self) -> Result<DigestAllResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(DigestAllResult {
                message: "done".to_string(),
                results: Vec::new(),
            })
        }
    }

    fn user(role: Role) -> User {
        User {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            role,
            onboarded: true,
            industry: None,
        }
    }

    async fn build(stored_user: Option<User>) -> (AdminService, Arc<CountingAdminApi>) {
        let stored = match stored_user {
            Some(user) => StoredSession {
                access_token: Some("tok".to_string()),
                refresh_token: Some("ref".to_string()),
                user: Some(user),
                onboarded: Some(true),
            },
            None => StoredSession::default(),
        };
        let session = Arc::new(SessionService::new(
            Arc::new(MemoryVault {
                stored: Mutex::new(stored),
            }),
            Arc::new(NoAuthApi),
            AccessTokenStore::new(),
        ));
        session.hydrate().await;
        let api = Arc::new(CountingAdminApi::default());
        (AdminService::new(api.clone(), session), api)
    }

    #[tokio::test]
    async fn test_admin_calls_pass_through() {
        let (service, api) = build(Some(user(Role::Admin))).await;

        service.users().await.unwrap();
        service.stats().await.unwrap();
        service.run_all_digests().await.unwrap();
        assert_eq!(api.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_admin_rejected_before_network() {
        let (service, api) = build(Some(user(Role::User))).await;

        let err = service.users().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_anonymous_rejected_before_network() {
        let (service, api) = build(None).await;

        let err = service.stats().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }
}
