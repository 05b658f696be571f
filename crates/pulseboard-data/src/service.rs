//! The data service: API first, scaled sample data on failure.

use std::sync::Arc;

use pulseboard_api::{
    ApiError, AudienceInsights, BusinessProfile, DashboardClient, MetricsSource, Monetization,
    Overview, OverviewQuery, ProfileMetrics, Trends,
};
use pulseboard_core::{Baselines, DashboardConfig, Profile, ProfileRegistry};

use crate::category::MetricCategory;
use crate::fallback;
use crate::growth::{follower_growth, FollowerGrowth};
use crate::sample;

/// Fetches dashboard metrics and never fails.
///
/// Each operation calls the [`MetricsSource`] once. On `Err`, the requesting
/// user's profile is resolved from the registry (synthesized for unknown
/// usernames) and a payload of the same type is built from the sample dataset,
/// scaled to that profile.
#[derive(Debug, Clone)]
pub struct DataService<S> {
    source: S,
    registry: Arc<ProfileRegistry>,
    baselines: Baselines,
}

impl DataService<DashboardClient> {
    /// Builds a service backed by [`DashboardClient`] using loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP client cannot be constructed from `config`.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ApiError> {
        let client = DashboardClient::new(config)?;
        Ok(Self::new(client).with_baselines(config.baselines))
    }
}

impl<S: MetricsSource> DataService<S> {
    /// Uses the built-in profile registry and default baselines.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            registry: ProfileRegistry::builtin(),
            baselines: Baselines::default(),
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Arc<ProfileRegistry>) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_baselines(mut self, baselines: Baselines) -> Self {
        self.baselines = baselines;
        self
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    #[must_use]
    pub fn baselines(&self) -> Baselines {
        self.baselines
    }

    pub async fn get_overview(
        &self,
        creator_id: &str,
        query: &OverviewQuery,
        username: &str,
    ) -> Overview {
        let result = self.source.get_overview(creator_id, query).await;
        self.recover(MetricCategory::Overview, username, result, |profile| {
            fallback::overview(profile, &self.baselines)
        })
    }

    pub async fn get_trends(&self, creator_id: &str, username: &str) -> Trends {
        let result = self.source.get_trends(creator_id).await;
        self.recover(MetricCategory::Trends, username, result, fallback::trends)
    }

    /// Profile-page cards. A numeric follower count from the API is rendered
    /// in compact form (`"45.2K"`) to match the fallback payload.
    pub async fn get_profile_metrics(&self, creator_id: &str, username: &str) -> ProfileMetrics {
        let result = self
            .source
            .get_profile_metrics(creator_id)
            .await
            .map(|mut metrics| {
                if let Some(card) = metrics.follower_count.as_mut() {
                    card.value = card.value.clone().into_compact();
                }
                metrics
            });
        self.recover(MetricCategory::ProfileMetrics, username, result, |profile| {
            fallback::profile_metrics(profile, &self.baselines)
        })
    }

    pub async fn get_audience_insights(&self, creator_id: &str, username: &str) -> AudienceInsights {
        let result = self.source.get_audience_insights(creator_id).await;
        self.recover(MetricCategory::AudienceInsights, username, result, |profile| {
            fallback::audience_insights(profile, &self.baselines)
        })
    }

    pub async fn get_monetization_metrics(&self, creator_id: &str, username: &str) -> Monetization {
        let result = self.source.get_monetization(creator_id).await;
        self.recover(MetricCategory::Monetization, username, result, |profile| {
            fallback::monetization(profile, &self.baselines)
        })
    }

    /// Business accounts are not in the creator registry; the fallback is the
    /// unscaled sample business profile.
    pub async fn get_business_profile(&self, user_id: &str) -> BusinessProfile {
        match self.source.get_business_profile(user_id).await {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(
                    category = %MetricCategory::BusinessProfile,
                    user_id,
                    error = %err,
                    "dashboard API failed, using fallback data"
                );
                sample::business_profile()
            }
        }
    }

    /// Current vs. previous followers per platform, computed from the profile
    /// alone. No API call is made.
    #[must_use]
    pub fn follower_growth(&self, username: &str) -> FollowerGrowth {
        follower_growth(&self.registry.resolve(username))
    }

    fn recover<T>(
        &self,
        category: MetricCategory,
        username: &str,
        result: Result<T, ApiError>,
        fallback: impl FnOnce(&Profile) -> T,
    ) -> T {
        match result {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(
                    category = %category,
                    username,
                    error = %err,
                    "dashboard API failed, using fallback data"
                );
                let profile = self.registry.resolve(username);
                fallback(&*profile)
            }
        }
    }
}
