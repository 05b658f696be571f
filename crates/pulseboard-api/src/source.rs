use std::future::Future;

use crate::client::DashboardClient;
use crate::error::ApiError;
use crate::query::OverviewQuery;
use crate::types::{
    AudienceInsights, BusinessProfile, Monetization, Overview, ProfileMetrics, Trends,
};

/// Anything that can answer the six metric queries.
///
/// [`DashboardClient`] is the production implementation; the data service is
/// generic over this trait so tests can substitute canned or failing sources.
pub trait MetricsSource: Send + Sync {
    fn get_overview(
        &self,
        creator_id: &str,
        query: &OverviewQuery,
    ) -> impl Future<Output = Result<Overview, ApiError>> + Send;

    fn get_trends(&self, creator_id: &str)
        -> impl Future<Output = Result<Trends, ApiError>> + Send;

    fn get_profile_metrics(
        &self,
        creator_id: &str,
    ) -> impl Future<Output = Result<ProfileMetrics, ApiError>> + Send;

    fn get_audience_insights(
        &self,
        creator_id: &str,
    ) -> impl Future<Output = Result<AudienceInsights, ApiError>> + Send;

    fn get_monetization(
        &self,
        creator_id: &str,
    ) -> impl Future<Output = Result<Monetization, ApiError>> + Send;

    fn get_business_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<BusinessProfile, ApiError>> + Send;
}

impl MetricsSource for DashboardClient {
    fn get_overview(
        &self,
        creator_id: &str,
        query: &OverviewQuery,
    ) -> impl Future<Output = Result<Overview, ApiError>> + Send {
        DashboardClient::get_overview(self, creator_id, query)
    }

    fn get_trends(
        &self,
        creator_id: &str,
    ) -> impl Future<Output = Result<Trends, ApiError>> + Send {
        DashboardClient::get_trends(self, creator_id)
    }

    fn get_profile_metrics(
        &self,
        creator_id: &str,
    ) -> impl Future<Output = Result<ProfileMetrics, ApiError>> + Send {
        DashboardClient::get_profile_metrics(self, creator_id)
    }

    fn get_audience_insights(
        &self,
        creator_id: &str,
    ) -> impl Future<Output = Result<AudienceInsights, ApiError>> + Send {
        DashboardClient::get_audience_insights(self, creator_id)
    }

    fn get_monetization(
        &self,
        creator_id: &str,
    ) -> impl Future<Output = Result<Monetization, ApiError>> + Send {
        DashboardClient::get_monetization(self, creator_id)
    }

    fn get_business_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<BusinessProfile, ApiError>> + Send {
        DashboardClient::get_business_profile(self, user_id)
    }
}
