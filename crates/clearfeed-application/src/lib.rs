//! Application layer for the Clearfeed client.
//!
//! This crate provides the stateful services that coordinate between the
//! domain, infrastructure and API layers: session management, the feed
//! orchestrator, the onboarding flow and admin operations.

pub mod admin_service;
pub mod feed_orchestrator;
pub mod onboarding_service;
pub mod session_service;

pub use admin_service::AdminService;
pub use feed_orchestrator::{
    BRIEFING_PAGE_SIZE, FLAT_PAGE_SIZE, FeedOrchestrator, FeedView, Notice, ViewMode,
};
pub use onboarding_service::{OnboardingService, OnboardingSummary};
pub use session_service::SessionService;

use std::sync::Arc;

use clearfeed_api::{ApiConfig, HttpApiClient};
use clearfeed_core::error::Result;
use clearfeed_core::session::AccessTokenStore;
use clearfeed_infrastructure::TomlSessionVault;

/// Fully wired client: one instance of every service, sharing a single
/// HTTP client and token handle.
pub struct Clearfeed {
    pub session: Arc<SessionService>,
    pub feed: Arc<FeedOrchestrator>,
    pub onboarding: Arc<OnboardingService>,
    pub admin: Arc<AdminService>,
}

impl Clearfeed {
    /// Wires the default stack: TOML session vault under the platform
    /// config directory and the HTTP client from `config`.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let tokens = AccessTokenStore::new();
        let client = Arc::new(HttpApiClient::new(config, tokens.clone()));
        let vault = Arc::new(TomlSessionVault::new()?);

        let session = Arc::new(SessionService::new(vault, client.clone(), tokens));
        let feed = Arc::new(FeedOrchestrator::new(client.clone()));
        let onboarding = Arc::new(OnboardingService::new(
            client.clone(),
            client.clone(),
            session.clone(),
        ));
        let admin = Arc::new(AdminService::new(client, session.clone()));

        Ok(Self {
            session,
            feed,
            onboarding,
            admin,
        })
    }
}
