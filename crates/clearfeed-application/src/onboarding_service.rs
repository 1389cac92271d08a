//! Onboarding flow: industry selection and first-feed setup.
//!
//! Submitting an industry seeds the account with curated sources and
//! keywords server-side, then kicks off the first digest so the feed has
//! content when the dashboard opens. The first digest is best effort: it
//! can legitimately fail right after setup, so its failure downgrades to
//! an informational state instead of failing the flow.

use std::sync::Arc;

use clearfeed_core::api::{FeedApi, OnboardingApi};
use clearfeed_core::error::Result;
use clearfeed_core::onboarding::{Industry, OnboardingResult};

use crate::session_service::SessionService;

/// Outcome of a completed onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSummary {
    pub result: OnboardingResult,
    /// Whether the automatic first digest succeeded.
    pub first_digest_ran: bool,
}

/// Drives the one-time onboarding flow for a new account.
pub struct OnboardingService {
    onboarding_api: Arc<dyn OnboardingApi>,
    feed_api: Arc<dyn FeedApi>,
    session: Arc<SessionService>,
}

impl OnboardingService {
    pub fn new(
        onboarding_api: Arc<dyn OnboardingApi>,
        feed_api: Arc<dyn FeedApi>,
        session: Arc<SessionService>,
    ) -> Self {
        Self {
            onboarding_api,
            feed_api,
            session,
        }
    }

    /// Lists the industries a new account can choose from.
    pub async fn industries(&self) -> Result<Vec<Industry>> {
        Ok(self.onboarding_api.industries().await?.industries)
    }

    /// Submits the chosen industry, runs the first digest, and marks the
    /// session onboarded.
    ///
    /// A submission failure propagates and leaves the onboarding flag
    /// unset so the flow can be retried.
    pub async fn complete(&self, industry_slug: &str) -> Result<OnboardingSummary> {
        let result = self.onboarding_api.submit_onboarding(industry_slug).await?;
        tracing::info!(
            sources = result.sources_added,
            keywords = result.keywords_added,
            "Onboarding profile created"
        );

        // Sources may not have been scraped yet, so a failure here is
        // expected and non-fatal
        let first_digest_ran = match self.feed_api.run_digest().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("First digest after onboarding failed: {e}");
                false
            }
        };

        self.session.set_onboarded(true).await?;

        Ok(OnboardingSummary {
            result,
            first_digest_ran,
        })
    }

    /// Skips the guided setup; the account is marked onboarded with no
    /// seeded sources or keywords.
    pub async fn skip(&self) -> Result<()> {
        self.session.set_onboarded(true).await
    }
}
