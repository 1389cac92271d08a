//! Session service: the single owner of authentication state.
//!
//! Coordinates the session vault, the auth endpoints and the shared
//! access-token handle. Every mutating operation writes the vault and the
//! in-memory snapshot in the same call, so a reload never observes one
//! without the other.

use std::sync::Arc;

use tokio::sync::RwLock;

use clearfeed_core::api::AuthApi;
use clearfeed_core::error::Result;
use clearfeed_core::session::{AccessTokenStore, Session, SessionVault, StoredSession};
use clearfeed_core::user::AuthResponse;

/// Owns the [`Session`] snapshot and its persisted form.
///
/// The session starts anonymous with `is_loading = true`; [`hydrate`]
/// finishes loading exactly once regardless of what the vault contains.
/// All other components read the snapshot and never mutate it.
///
/// [`hydrate`]: SessionService::hydrate
pub struct SessionService {
    session: Arc<RwLock<Session>>,
    vault: Arc<dyn SessionVault>,
    auth_api: Arc<dyn AuthApi>,
    tokens: AccessTokenStore,
}

impl SessionService {
    pub fn new(
        vault: Arc<dyn SessionVault>,
        auth_api: Arc<dyn AuthApi>,
        tokens: AccessTokenStore,
    ) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            vault,
            auth_api,
            tokens,
        }
    }

    /// Returns a copy of the current session snapshot.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Restores the session from the vault at process start.
    ///
    /// The session becomes authenticated only when both a user record and
    /// an access credential were persisted; any partial or unreadable
    /// state is treated as "no session". Always terminates with
    /// `is_loading = false`.
    pub async fn hydrate(&self) {
        let stored = match self.vault.load().await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Session hydration failed, starting anonymous: {e}");
                StoredSession::default()
            }
        };

        if stored.is_authenticated() {
            self.tokens.set(stored.access_token.clone()).await;
        }

        let mut session = self.session.write().await;
        if stored.is_authenticated() {
            session.user = stored.user;
            session.onboarded = stored.onboarded.unwrap_or(false);
        }
        session.is_loading = false;
    }

    /// Authenticates against the backend and establishes the session.
    ///
    /// On failure the session is unchanged and the error propagates to
    /// the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let auth = self.auth_api.login(email, password).await?;
        self.establish(auth).await
    }

    /// Creates an account and establishes the session. New accounts
    /// arrive not yet onboarded.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let auth = self.auth_api.register(name, email, password).await?;
        self.establish(auth).await
    }

    /// Clears the vault and resets the session to anonymous. Safe to call
    /// when already logged out.
    pub async fn logout(&self) -> Result<()> {
        self.vault.clear().await?;
        self.tokens.clear().await;

        let mut session = self.session.write().await;
        session.user = None;
        session.onboarded = false;
        Ok(())
    }

    /// Persists and sets the onboarding flag without contacting the
    /// server; the onboarding submission call is assumed to have already
    /// updated the backend.
    pub async fn set_onboarded(&self, onboarded: bool) -> Result<()> {
        let mut stored = self.vault.load().await?;
        stored.onboarded = Some(onboarded);
        self.vault.store(&stored).await?;

        let mut session = self.session.write().await;
        session.onboarded = onboarded;
        Ok(())
    }

    /// Persists the auth response and updates the snapshot. `onboarded`
    /// comes strictly from the server's flag on the user record.
    async fn establish(&self, auth: AuthResponse) -> Result<()> {
        let onboarded = auth.user.onboarded;
        let stored = StoredSession {
            access_token: Some(auth.access_token.clone()),
            refresh_token: Some(auth.refresh_token),
            user: Some(auth.user.clone()),
            onboarded: Some(onboarded),
        };
        self.vault.store(&stored).await?;
        self.tokens.set(Some(auth.access_token)).await;

        let mut session = self.session.write().await;
        session.user = Some(auth.user);
        session.onboarded = onboarded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use clearfeed_core::error::ClearfeedError;
    use clearfeed_core::user::{Role, User};

    // Mock SessionVault for testing
    struct MockVault {
        stored: Mutex<StoredSession>,
        store_calls: Mutex<u32>,
    }

    impl MockVault {
        fn new(initial: StoredSession) -> Self {
            Self {
                stored: Mutex::new(initial),
                store_calls: Mutex::new(0),
            }
        }

        fn stored(&self) -> StoredSession {
            self.stored.lock().unwrap().clone()
        }

        fn store_calls(&self) -> u32 {
            *self.store_calls.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl SessionVault for MockVault {
        async fn load(&self) -> Result<StoredSession> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn store(&self, session: &StoredSession) -> Result<()> {
            *self.stored.lock().unwrap() = session.clone();
            *self.store_calls.lock().unwrap() += 1;
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.stored.lock().unwrap() = StoredSession::default();
            Ok(())
        }
    }

    // Mock AuthApi for testing
    struct MockAuthApi {
        response: Mutex<Option<Result<AuthResponse>>>,
    }

    impl MockAuthApi {
        fn with(response: Result<AuthResponse>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
            }
        }

        fn unused() -> Self {
            Self {
                response: Mutex::new(None),
            }
        }

        fn take(&self) -> Result<AuthResponse> {
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(ClearfeedError::internal("unexpected auth call")))
        }
    }

    #[async_trait::async_trait]
    impl AuthApi for MockAuthApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse> {
            self.take()
        }

        async fn register(&self, _name: &str, _email: &str, _password: &str) -> Result<AuthResponse> {
            self.take()
        }
    }

    fn user(onboarded: bool) -> User {
        User {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            role: Role::User,
            onboarded,
            industry: None,
        }
    }

    fn auth_response(onboarded: bool) -> AuthResponse {
        AuthResponse {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            user: user(onboarded),
        }
    }

    fn service(initial: StoredSession, auth: MockAuthApi) -> (SessionService, Arc<MockVault>) {
        let vault = Arc::new(MockVault::new(initial));
        let service = SessionService::new(vault.clone(), Arc::new(auth), AccessTokenStore::new());
        (service, vault)
    }

    #[tokio::test]
    async fn test_hydration_truth_table() {
        // Session is authenticated iff both the user record and the
        // access credential were persisted, for every presence combination
        for has_user in [false, true] {
            for has_token in [false, true] {
                for has_flag in [false, true] {
                    let stored = StoredSession {
                        access_token: has_token.then(|| "access".to_string()),
                        refresh_token: None,
                        user: has_user.then(|| user(true)),
                        onboarded: has_flag.then_some(true),
                    };
                    let (service, _vault) = service(stored, MockAuthApi::unused());

                    assert!(service.snapshot().await.is_loading);
                    service.hydrate().await;

                    let session = service.snapshot().await;
                    assert!(!session.is_loading, "({has_user}, {has_token}, {has_flag})");
                    assert_eq!(
                        session.is_authenticated(),
                        has_user && has_token,
                        "({has_user}, {has_token}, {has_flag})"
                    );
                    assert_eq!(
                        session.onboarded,
                        has_user && has_token && has_flag,
                        "({has_user}, {has_token}, {has_flag})"
                    );
                }
            }
        }
    }

    #[tokio::test]
    async fn test_hydrate_exposes_token_for_restored_session() {
        let stored = StoredSession {
            access_token: Some("persisted-token".to_string()),
            refresh_token: Some("refresh".to_string()),
            user: Some(user(true)),
            onboarded: Some(true),
        };
        let vault = Arc::new(MockVault::new(stored));
        let tokens = AccessTokenStore::new();
        let service =
            SessionService::new(vault, Arc::new(MockAuthApi::unused()), tokens.clone());

        service.hydrate().await;
        assert_eq!(tokens.get().await, Some("persisted-token".to_string()));
    }

    #[tokio::test]
    async fn test_login_persists_all_artifacts() {
        let (service, vault) = service(
            StoredSession::default(),
            MockAuthApi::with(Ok(auth_response(true))),
        );

        service.login("ada@example.com", "pw").await.unwrap();

        let session = service.snapshot().await;
        assert!(session.is_authenticated());
        assert!(session.onboarded);

        let stored = vault.stored();
        assert_eq!(stored.access_token.as_deref(), Some("access"));
        assert_eq!(stored.refresh_token.as_deref(), Some("refresh"));
        assert!(stored.user.is_some());
        assert_eq!(stored.onboarded, Some(true));
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_unchanged() {
        let (service, vault) = service(
            StoredSession::default(),
            MockAuthApi::with(Err(ClearfeedError::api(401, "Invalid credentials"))),
        );

        let err = service.login("ada@example.com", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());

        let session = service.snapshot().await;
        assert!(!session.is_authenticated());
        assert_eq!(vault.store_calls(), 0);
    }

    #[tokio::test]
    async fn test_register_arrives_not_onboarded() {
        let (service, _vault) = service(
            StoredSession::default(),
            MockAuthApi::with(Ok(auth_response(false))),
        );

        service
            .register("Ada", "ada@example.com", "pw")
            .await
            .unwrap();

        let session = service.snapshot().await;
        assert!(session.is_authenticated());
        assert!(!session.onboarded);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (service, vault) = service(
            StoredSession::default(),
            MockAuthApi::with(Ok(auth_response(true))),
        );
        service.login("ada@example.com", "pw").await.unwrap();

        service.logout().await.unwrap();
        let after_first = service.snapshot().await;
        assert!(!after_first.is_authenticated());
        assert!(!after_first.onboarded);
        assert!(vault.stored().is_empty());

        service.logout().await.unwrap();
        let after_second = service.snapshot().await;
        assert_eq!(after_first, after_second);
        assert!(vault.stored().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_token_handle() {
        let vault = Arc::new(MockVault::new(StoredSession::default()));
        let tokens = AccessTokenStore::new();
        let service = SessionService::new(
            vault,
            Arc::new(MockAuthApi::with(Ok(auth_response(true)))),
            tokens.clone(),
        );

        service.login("ada@example.com", "pw").await.unwrap();
        assert!(tokens.get().await.is_some());

        service.logout().await.unwrap();
        assert!(tokens.get().await.is_none());
    }

    #[tokio::test]
    async fn test_session_survives_restart_via_vault() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        let vault = Arc::new(clearfeed_infrastructure::TomlSessionVault::with_path(
            path.clone(),
        ));
        let service = SessionService::new(
            vault,
            Arc::new(MockAuthApi::with(Ok(auth_response(true)))),
            AccessTokenStore::new(),
        );
        service.hydrate().await;
        service.login("ada@example.com", "pw").await.unwrap();

        // A fresh process hydrates the same state from disk
        let vault = Arc::new(clearfeed_infrastructure::TomlSessionVault::with_path(path));
        let tokens = AccessTokenStore::new();
        let restarted =
            SessionService::new(vault, Arc::new(MockAuthApi::unused()), tokens.clone());
        restarted.hydrate().await;

        let session = restarted.snapshot().await;
        assert!(!session.is_loading);
        assert!(session.is_authenticated());
        assert!(session.onboarded);
        assert_eq!(session.user.unwrap().email, "ada@example.com");
        assert_eq!(tokens.get().await.as_deref(), Some("access"));
    }

    #[tokio::test]
    async fn test_set_onboarded_persists_flag() {
        let (service, vault) = service(
            StoredSession::default(),
            MockAuthApi::with(Ok(auth_response(false))),
        );
        service.login("ada@example.com", "pw").await.unwrap();
        assert!(!service.snapshot().await.onboarded);

        service.set_onboarded(true).await.unwrap();

        assert!(service.snapshot().await.onboarded);
        assert_eq!(vault.stored().onboarded, Some(true));
        // The other artifacts stay in place
        assert!(vault.stored().is_authenticated());
    }
}
