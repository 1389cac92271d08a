//! Feed orchestrator: the dashboard's view-state machine.
//!
//! Coordinates the grouped briefing and the flat article list, each with
//! its own pagination, plus the period report, the digest trigger and the
//! group-reset operation. Every network operation either replaces its
//! slice of state or leaves prior state intact and records a single
//! user-facing notice; nothing retries automatically.
//!
//! Superseded fetches are discarded by request token: each view carries a
//! monotonically increasing counter, a fetch captures the counter when it
//! starts, and a response is applied only while its counter is still
//! current. A stale response for a previous period or page therefore
//! never overwrites newer state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use clearfeed_core::api::FeedApi;
use clearfeed_core::error::Result;
use clearfeed_core::feed::{
    DigestOutcome, FeedArticleDetail, FeedResponse, GroupDetail, GroupedFeedResponse, Period,
    PeriodReport,
};
use clearfeed_core::present::{self, BriefingPresentation, SignalBar};

/// Page size of the grouped briefing view.
pub const BRIEFING_PAGE_SIZE: u32 = 10;
/// Page size of the flat article view.
pub const FLAT_PAGE_SIZE: u32 = 20;

/// Which of the two dashboard views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Briefing,
    FlatList,
}

/// The single notice slot. A new operation clears the previous notice;
/// success and failure each produce exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug)]
struct OrchestratorState {
    mode: ViewMode,
    period: Period,
    briefing_page: u32,
    flat_page: u32,
    briefing: Option<GroupedFeedResponse>,
    flat: Option<FeedResponse>,
    report: Option<PeriodReport>,
    /// Distinguishes "report fetched, none exists" from "never fetched".
    report_loaded: bool,
    last_digest: Option<DigestOutcome>,
    notice: Option<Notice>,
    briefing_token: u64,
    flat_token: u64,
    report_token: u64,
}

impl Default for OrchestratorState {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            period: Period::default(),
            briefing_page: 1,
            flat_page: 1,
            briefing: None,
            flat: None,
            report: None,
            report_loaded: false,
            last_digest: None,
            notice: None,
            briefing_token: 0,
            flat_token: 0,
            report_token: 0,
        }
    }
}

/// Read-only snapshot of the orchestrator state for rendering.
#[derive(Debug, Clone)]
pub struct FeedView {
    pub mode: ViewMode,
    pub period: Period,
    pub briefing_page: u32,
    pub flat_page: u32,
    pub briefing: Option<GroupedFeedResponse>,
    pub flat: Option<FeedResponse>,
    pub report: Option<PeriodReport>,
    pub last_digest: Option<DigestOutcome>,
    pub notice: Option<Notice>,
}

/// Drives all dashboard interaction against the feed API.
///
/// Owns the view state exclusively; no other component mutates it.
pub struct FeedOrchestrator {
    api: Arc<dyn FeedApi>,
    state: RwLock<OrchestratorState>,
    /// Set while a digest or reset call is in flight; the two operations
    /// are mutually exclusive with each other and with themselves.
    maintenance_running: AtomicBool,
}

impl FeedOrchestrator {
    pub fn new(api: Arc<dyn FeedApi>) -> Self {
        Self {
            api,
            state: RwLock::new(OrchestratorState::default()),
            maintenance_running: AtomicBool::new(false),
        }
    }

    /// Returns a copy of the current view state.
    pub async fn view(&self) -> FeedView {
        let s = self.state.read().await;
        FeedView {
            mode: s.mode,
            period: s.period,
            briefing_page: s.briefing_page,
            flat_page: s.flat_page,
            briefing: s.briefing.clone(),
            flat: s.flat.clone(),
            report: s.report.clone(),
            last_digest: s.last_digest.clone(),
            notice: s.notice.clone(),
        }
    }

    /// Loads the active view if it has no data yet. Called when the
    /// dashboard mounts.
    pub async fn ensure_loaded(&self) {
        let mode = self.state.read().await.mode;
        self.select_mode(mode).await;
    }

    /// Switches the active view, fetching it on first use.
    pub async fn select_mode(&self, mode: ViewMode) {
        let (needs_view, needs_report) = {
            let mut s = self.state.write().await;
            s.mode = mode;
            s.notice = None;
            match mode {
                ViewMode::Briefing => (s.briefing.is_none(), !s.report_loaded),
                ViewMode::FlatList => (s.flat.is_none(), false),
            }
        };
        match mode {
            ViewMode::Briefing => {
                if needs_view {
                    self.refresh_briefing().await;
                }
                if needs_report {
                    self.refresh_report().await;
                }
            }
            ViewMode::FlatList => {
                if needs_view {
                    self.refresh_flat().await;
                }
            }
        }
    }

    /// Changes the reporting period (briefing view only).
    ///
    /// Period and page together form the briefing cache key, so the page
    /// always resets to 1 and both the list and the report refetch.
    pub async fn select_period(&self, period: Period) {
        {
            let mut s = self.state.write().await;
            s.period = period;
            s.briefing_page = 1;
            s.report_loaded = false;
            s.notice = None;
        }
        self.refresh_briefing().await;
        self.refresh_report().await;
    }

    /// Moves one view to another page and refetches only that view.
    pub async fn change_page(&self, view: ViewMode, page: u32) {
        let page = page.max(1);
        {
            let mut s = self.state.write().await;
            s.notice = None;
            match view {
                ViewMode::Briefing => s.briefing_page = page,
                ViewMode::FlatList => s.flat_page = page,
            }
        }
        match view {
            ViewMode::Briefing => self.refresh_briefing().await,
            ViewMode::FlatList => self.refresh_flat().await,
        }
    }

    /// Triggers a digest run, then refreshes the active view.
    ///
    /// Ignored while another digest or reset is in flight. On failure the
    /// held data is untouched and a single failure notice is recorded.
    pub async fn run_digest(&self) {
        let Some(_guard) = self.begin_maintenance() else {
            tracing::debug!("Digest ignored: maintenance already running");
            return;
        };

        {
            let mut s = self.state.write().await;
            s.notice = None;
        }

        match self.api.run_digest().await {
            Ok(result) => {
                let outcome = result.result;
                {
                    let mut s = self.state.write().await;
                    s.notice = Some(Notice::Success(format!(
                        "Digest complete: {} scraped, {} matched, {} summarized",
                        outcome.scraped, outcome.matched, outcome.summarized
                    )));
                    s.last_digest = Some(outcome);
                }
                self.refresh_active().await;
            }
            Err(e) => {
                tracing::warn!("Digest run failed: {e}");
                let mut s = self.state.write().await;
                s.notice = Some(Notice::Error("Digest failed. Please try again.".to_string()));
            }
        }
    }

    /// Discards the server-side story grouping.
    ///
    /// Same exclusion guard as the digest. On success the briefing list
    /// refetches when it is the active view; the flat list is untouched.
    pub async fn reset_groups(&self) {
        let Some(_guard) = self.begin_maintenance() else {
            tracing::debug!("Reset ignored: maintenance already running");
            return;
        };

        {
            let mut s = self.state.write().await;
            s.notice = None;
        }

        match self.api.reset_groups().await {
            Ok(outcome) => {
                let mode = {
                    let mut s = self.state.write().await;
                    s.notice = Some(Notice::Success(outcome.message));
                    s.mode
                };
                if mode == ViewMode::Briefing {
                    self.refresh_briefing().await;
                }
            }
            Err(e) => {
                tracing::warn!("Group reset failed: {e}");
                let mut s = self.state.write().await;
                s.notice = Some(Notice::Error("Failed to reset stories.".to_string()));
            }
        }
    }

    /// Whether a digest or reset call is currently in flight.
    pub fn is_maintenance_running(&self) -> bool {
        self.maintenance_running.load(Ordering::SeqCst)
    }

    /// Fetches one briefing with complete article bodies. Detail pages
    /// manage their own loading state, so list state is untouched.
    pub async fn group_detail(&self, id: &str) -> Result<GroupDetail> {
        self.api.group_detail(id).await
    }

    /// Fetches one flat-feed article with its full content.
    pub async fn article_detail(&self, id: &str) -> Result<FeedArticleDetail> {
        self.api.article_detail(id).await
    }

    /// Derives the presentation data for the currently held briefings, in
    /// list order. Recomputed on every call.
    pub async fn briefing_presentations(&self) -> Vec<BriefingPresentation> {
        let s = self.state.read().await;
        s.briefing
            .as_ref()
            .map(|response| {
                response
                    .groups
                    .iter()
                    .map(present::present_briefing)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Derives the relative signal bars for the currently held report.
    pub async fn report_bars(&self) -> Vec<SignalBar> {
        let s = self.state.read().await;
        s.report
            .as_ref()
            .map(|report| {
                present::signal_bars(&report.stats.signal_distribution, present::MAX_SIGNAL_BARS)
            })
            .unwrap_or_default()
    }

    async fn refresh_active(&self) {
        let mode = self.state.read().await.mode;
        match mode {
            ViewMode::Briefing => {
                self.refresh_briefing().await;
                self.refresh_report().await;
            }
            ViewMode::FlatList => self.refresh_flat().await,
        }
    }

    async fn refresh_briefing(&self) {
        let (page, period, token) = {
            let mut s = self.state.write().await;
            s.briefing_token += 1;
            (s.briefing_page, s.period, s.briefing_token)
        };
        tracing::debug!(page, period = %period, "Fetching briefing page");

        match self
            .api
            .grouped_feed(page, BRIEFING_PAGE_SIZE, Some(period))
            .await
        {
            Ok(response) => {
                let mut s = self.state.write().await;
                if s.briefing_token == token {
                    s.briefing = Some(response);
                } else {
                    tracing::debug!("Discarding superseded briefing response");
                }
            }
            Err(e) => {
                let mut s = self.state.write().await;
                if s.briefing_token == token {
                    tracing::warn!("Briefing fetch failed: {e}");
                    s.notice = Some(Notice::Error(
                        "Failed to load intelligence brief.".to_string(),
                    ));
                }
            }
        }
    }

    async fn refresh_flat(&self) {
        let (page, token) = {
            let mut s = self.state.write().await;
            s.flat_token += 1;
            (s.flat_page, s.flat_token)
        };
        tracing::debug!(page, "Fetching flat feed page");

        match self.api.flat_feed(page, FLAT_PAGE_SIZE).await {
            Ok(response) => {
                let mut s = self.state.write().await;
                if s.flat_token == token {
                    s.flat = Some(response);
                } else {
                    tracing::debug!("Discarding superseded flat feed response");
                }
            }
            Err(e) => {
                let mut s = self.state.write().await;
                if s.flat_token == token {
                    tracing::warn!("Flat feed fetch failed: {e}");
                    s.notice = Some(Notice::Error("Failed to load articles.".to_string()));
                }
            }
        }
    }

    async fn refresh_report(&self) {
        let (period, token) = {
            let mut s = self.state.write().await;
            s.report_token += 1;
            (s.period, s.report_token)
        };

        match self.api.period_report(period).await {
            // A missing report is an expected empty state, not an error
            Ok(report) => {
                let mut s = self.state.write().await;
                if s.report_token == token {
                    s.report = report;
                    s.report_loaded = true;
                }
            }
            Err(e) => {
                let mut s = self.state.write().await;
                if s.report_token == token {
                    tracing::warn!("Report fetch failed: {e}");
                    s.notice = Some(Notice::Error("Failed to load report.".to_string()));
                }
            }
        }
    }

    fn begin_maintenance(&self) -> Option<MaintenanceGuard<'_>> {
        self.maintenance_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        Some(MaintenanceGuard {
            flag: &self.maintenance_running,
        })
    }
}

/// Clears the maintenance flag on drop, so a failed or panicked call can
/// never leave the guard stuck.
struct MaintenanceGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for MaintenanceGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "feed_orchestrator_test.rs"]
mod feed_orchestrator_test;
