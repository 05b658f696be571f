//! HTTP client for the dashboard backend.
//!
//! Wraps `reqwest` with endpoint construction, status checking, and typed
//! response deserialization. Every method maps to exactly one GET request.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use pulseboard_core::DashboardConfig;

use crate::error::ApiError;
use crate::query::OverviewQuery;
use crate::types::{
    AudienceInsights, BusinessProfile, Monetization, Overview, ProfileMetrics, Trends,
};

const OVERVIEW_PATH: &str = "api/dashboard/overview";
const TRENDS_PATH: &str = "api/dashboard/trends";
const PROFILE_METRICS_PATH: &str = "api/creator/profile-metrics";
const AUDIENCE_INSIGHTS_PATH: &str = "api/creator/audience-insights";
const MONETIZATION_PATH: &str = "api/creator/monetization";
const BUSINESS_PROFILE_PATH: &str = "api/business/profile";

/// Client for the dashboard REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: Url,
}

impl DashboardClient {
    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if the configured URL
    /// does not parse.
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute URL that paths can be joined onto.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining "api/..." appends to any
        // path prefix instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Aggregate engagement totals for a creator.
    ///
    /// The `platform` parameter is sent only for a specific platform; the
    /// aggregate filter omits it.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ApiError::Deserialize`] if the body is not an overview record.
    pub async fn get_overview(
        &self,
        creator_id: &str,
        query: &OverviewQuery,
    ) -> Result<Overview, ApiError> {
        let mut params = vec![("creator_id", creator_id)];
        if let Some(platform) = query.platform.platform() {
            params.push(("platform", platform.as_str()));
        }
        if let Some(range) = query.date_range {
            params.push(("date_range", range.as_str()));
        }

        let url = self.build_url(OVERVIEW_PATH, &params)?;
        self.request_json(url, &format!("overview(creator_id={creator_id})"))
            .await
    }

    /// Week-over-week engagement facts.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DashboardClient::get_overview`].
    pub async fn get_trends(&self, creator_id: &str) -> Result<Trends, ApiError> {
        let url = self.build_url(TRENDS_PATH, &[("creator_id", creator_id)])?;
        self.request_json(url, &format!("trends(creator_id={creator_id})"))
            .await
    }

    /// Headline cards for the creator profile page.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DashboardClient::get_overview`].
    pub async fn get_profile_metrics(&self, creator_id: &str) -> Result<ProfileMetrics, ApiError> {
        let url = self.build_url(PROFILE_METRICS_PATH, &[("creator_id", creator_id)])?;
        self.request_json(url, &format!("profile-metrics(creator_id={creator_id})"))
            .await
    }

    /// Follower timeline, audience composition, and per-platform behavior.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DashboardClient::get_overview`].
    pub async fn get_audience_insights(
        &self,
        creator_id: &str,
    ) -> Result<AudienceInsights, ApiError> {
        let url = self.build_url(AUDIENCE_INSIGHTS_PATH, &[("creator_id", creator_id)])?;
        self.request_json(url, &format!("audience-insights(creator_id={creator_id})"))
            .await
    }

    /// Revenue totals and per-format revenue.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DashboardClient::get_overview`].
    pub async fn get_monetization(&self, creator_id: &str) -> Result<Monetization, ApiError> {
        let url = self.build_url(MONETIZATION_PATH, &[("creator_id", creator_id)])?;
        self.request_json(url, &format!("monetization(creator_id={creator_id})"))
            .await
    }

    /// Company profile of a business user. Unknown users yield an empty record.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DashboardClient::get_overview`].
    pub async fn get_business_profile(&self, user_id: &str) -> Result<BusinessProfile, ApiError> {
        let url = self.build_url(BUSINESS_PROFILE_PATH, &[("user_id", user_id)])?;
        self.request_json(url, &format!("business-profile(user_id={user_id})"))
            .await
    }

    /// Joins `path` onto the base URL and appends percent-encoded query pairs.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, rejects non-2xx statuses, and parses the body
    /// into `T`.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, ApiError> {
        tracing::debug!(url = %url, "dashboard API request");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
