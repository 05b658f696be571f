//! HTTP client for the creator analytics backend.
//!
//! One typed GET per metric category. Failures come back as [`ApiError`];
//! nothing is retried or cached here.

pub mod client;
pub mod error;
pub mod query;
pub mod source;
pub mod types;

pub use client::DashboardClient;
pub use error::ApiError;
pub use query::{DateRange, OverviewQuery, PlatformFilter};
pub use source::MetricsSource;
pub use types::{
    AudienceComposition, AudienceInsights, BestFormat, BusinessLead, BusinessProfile,
    ContentRevenue, FollowerPoint, MetricCard, MetricValue, Monetization, Overview,
    PeriodStats, PlatformBehavior, ProfileMetrics, Revenue, SentimentBreakdown, TrendFacts,
    Trends, VisibilitySettings,
};
