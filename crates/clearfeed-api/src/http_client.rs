//! HTTP implementation of the backend API traits.
//!
//! One client instance serves the whole app. The bearer token is read
//! from the shared [`AccessTokenStore`] on every request, so a login or
//! logout is picked up immediately without rebuilding the client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use clearfeed_core::admin::{AdminStats, AdminUser};
use clearfeed_core::api::{AdminApi, AuthApi, FeedApi, OnboardingApi};
use clearfeed_core::catalog::{Keyword, NewSource, Source, SourceUpdate};
use clearfeed_core::error::{ClearfeedError, Result};
use clearfeed_core::feed::{
    DigestAllResult, DigestResult, FeedArticleDetail, FeedResponse, GroupDetail,
    GroupedFeedResponse, Period, PeriodReport, ResetOutcome,
};
use clearfeed_core::onboarding::{IndustriesResponse, OnboardingResult};
use clearfeed_core::session::AccessTokenStore;
use clearfeed_core::user::AuthResponse;

use crate::config::ApiConfig;

/// Concrete backend client. Implements every API trait in
/// `clearfeed-core` plus the source/keyword catalog endpoints.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    tokens: AccessTokenStore,
}

impl HttpApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: ApiConfig, tokens: AccessTokenStore) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request with timeout and, when a session exists, the
    /// bearer header.
    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, self.url(path))
            .timeout(self.timeout);
        if let Some(token) = self.tokens.get().await {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        Self::decode(response).await
    }

    /// Sends a request whose success response carries no payload of
    /// interest.
    async fn execute_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(status_error(status.as_u16(), &body))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "API request failed");
            Err(status_error(status.as_u16(), &body))
        }
    }

    // ── Sources ──

    pub async fn sources(&self) -> Result<Vec<Source>> {
        self.execute(self.request(Method::GET, "/api/sources").await)
            .await
    }

    pub async fn create_source(&self, source: &NewSource) -> Result<Source> {
        self.execute(self.request(Method::POST, "/api/sources").await.json(source))
            .await
    }

    pub async fn update_source(&self, id: &str, update: &SourceUpdate) -> Result<Source> {
        self.execute(
            self.request(Method::PUT, &format!("/api/sources/{id}"))
                .await
                .json(update),
        )
        .await
    }

    pub async fn delete_source(&self, id: &str) -> Result<()> {
        self.execute_no_content(
            self.request(Method::DELETE, &format!("/api/sources/{id}"))
                .await,
        )
        .await
    }

    // ── Keywords ──

    pub async fn keywords(&self) -> Result<Vec<Keyword>> {
        self.execute(self.request(Method::GET, "/api/keywords").await)
            .await
    }

    pub async fn create_keyword(&self, word: &str) -> Result<Keyword> {
        self.execute(
            self.request(Method::POST, "/api/keywords")
                .await
                .json(&json!({ "word": word })),
        )
        .await
    }

    pub async fn delete_keyword(&self, id: &str) -> Result<()> {
        self.execute_no_content(
            self.request(Method::DELETE, &format!("/api/keywords/{id}"))
                .await,
        )
        .await
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.execute(
            self.request(Method::POST, "/api/auth/login")
                .await
                .json(&json!({ "email": email, "password": password })),
        )
        .await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        self.execute(
            self.request(Method::POST, "/api/auth/register")
                .await
                .json(&json!({ "name": name, "email": email, "password": password })),
        )
        .await
    }
}

#[async_trait]
impl FeedApi for HttpApiClient {
    async fn flat_feed(&self, page: u32, limit: u32) -> Result<FeedResponse> {
        self.execute(
            self.request(Method::GET, "/api/feed")
                .await
                .query(&[("page", page.to_string()), ("limit", limit.to_string())]),
        )
        .await
    }

    async fn article_detail(&self, id: &str) -> Result<FeedArticleDetail> {
        self.execute(self.request(Method::GET, &format!("/api/feed/{id}")).await)
            .await
    }

    async fn grouped_feed(
        &self,
        page: u32,
        limit: u32,
        period: Option<Period>,
    ) -> Result<GroupedFeedResponse> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(period) = period {
            query.push(("period", period.as_str().to_string()));
        }
        self.execute(
            self.request(Method::GET, "/api/feed/brief")
                .await
                .query(&query),
        )
        .await
    }

    async fn period_report(&self, period: Period) -> Result<Option<PeriodReport>> {
        let response = self
            .request(Method::GET, "/api/feed/brief/report")
            .await
            .query(&[("period", period.as_str())])
            .send()
            .await?;

        // No report generated for this window yet: an expected state
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    async fn group_detail(&self, id: &str) -> Result<GroupDetail> {
        self.execute(
            self.request(Method::GET, &format!("/api/feed/groups/{id}"))
                .await,
        )
        .await
    }

    async fn run_digest(&self) -> Result<DigestResult> {
        // Deliberately bodyless; the endpoint takes no parameters
        self.execute(self.request(Method::POST, "/api/digest/run").await)
            .await
    }

    async fn reset_groups(&self) -> Result<ResetOutcome> {
        self.execute(self.request(Method::POST, "/api/feed/brief/reset").await)
            .await
    }
}

#[async_trait]
impl OnboardingApi for HttpApiClient {
    async fn industries(&self) -> Result<IndustriesResponse> {
        self.execute(self.request(Method::GET, "/api/onboarding/industries").await)
            .await
    }

    async fn submit_onboarding(&self, industry_slug: &str) -> Result<OnboardingResult> {
        self.execute(
            self.request(Method::POST, "/api/onboarding")
                .await
                .json(&json!({ "industrySlug": industry_slug })),
        )
        .await
    }
}

#[async_trait]
impl AdminApi for HttpApiClient {
    async fn admin_users(&self) -> Result<Vec<AdminUser>> {
        self.execute(self.request(Method::GET, "/api/admin/users").await)
            .await
    }

    async fn admin_stats(&self) -> Result<AdminStats> {
        self.execute(self.request(Method::GET, "/api/admin/stats").await)
            .await
    }

    async fn run_all_digests(&self) -> Result<DigestAllResult> {
        self.execute(self.request(Method::POST, "/api/digest/run-all").await)
            .await
    }
}

/// Maps a non-2xx response to the error taxonomy: 401 is an authorization
/// failure, everything else an API error carrying the server's structured
/// message when one exists.
fn status_error(status: u16, body: &str) -> ClearfeedError {
    let message = extract_error_message(body).unwrap_or_else(|| format!("HTTP {status}"));
    if status == 401 {
        ClearfeedError::unauthorized(message)
    } else {
        ClearfeedError::api(status, message)
    }
}

/// Pulls the human-readable message out of a `{"error": …}` or
/// `{"message": …}` body.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .filter(|m| !m.is_empty())
}
