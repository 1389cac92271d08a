//! Backend API traits.
//!
//! These traits are the seams between the stateful services and the HTTP
//! transport. The concrete implementation lives in `clearfeed-api`;
//! tests substitute in-memory mocks.

use async_trait::async_trait;

use crate::admin::{AdminStats, AdminUser};
use crate::error::Result;
use crate::feed::{
    DigestAllResult, DigestResult, FeedArticleDetail, FeedResponse, GroupDetail,
    GroupedFeedResponse, Period, PeriodReport, ResetOutcome,
};
use crate::onboarding::{IndustriesResponse, OnboardingResult};
use crate::user::AuthResponse;

/// Authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse>;
}

/// Feed, report, digest and reset endpoints.
#[async_trait]
pub trait FeedApi: Send + Sync {
    /// One page of the flat article feed.
    async fn flat_feed(&self, page: u32, limit: u32) -> Result<FeedResponse>;

    /// A flat-feed article with its full content.
    async fn article_detail(&self, id: &str) -> Result<FeedArticleDetail>;

    /// One page of the grouped intelligence feed, optionally scoped to a
    /// period.
    async fn grouped_feed(
        &self,
        page: u32,
        limit: u32,
        period: Option<Period>,
    ) -> Result<GroupedFeedResponse>;

    /// The aggregate report for a period. `Ok(None)` means no report has
    /// been generated for that window yet, which is an expected state.
    async fn period_report(&self, period: Period) -> Result<Option<PeriodReport>>;

    /// A briefing with complete article bodies.
    async fn group_detail(&self, id: &str) -> Result<GroupDetail>;

    /// Triggers a digest run for the current account. No request body.
    async fn run_digest(&self) -> Result<DigestResult>;

    /// Discards the current account's story grouping so the next digest
    /// rebuilds it. No request body.
    async fn reset_groups(&self) -> Result<ResetOutcome>;
}

/// Onboarding endpoints.
#[async_trait]
pub trait OnboardingApi: Send + Sync {
    async fn industries(&self) -> Result<IndustriesResponse>;

    async fn submit_onboarding(&self, industry_slug: &str) -> Result<OnboardingResult>;
}

/// Admin-only endpoints.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn admin_users(&self) -> Result<Vec<AdminUser>>;

    async fn admin_stats(&self) -> Result<AdminStats>;

    /// Runs the digest for every account. No request body.
    async fn run_all_digests(&self) -> Result<DigestAllResult>;
}
