/// Metric categories served by the dashboard API, used to label fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    Overview,
    Trends,
    ProfileMetrics,
    AudienceInsights,
    Monetization,
    BusinessProfile,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 6] = [
        MetricCategory::Overview,
        MetricCategory::Trends,
        MetricCategory::ProfileMetrics,
        MetricCategory::AudienceInsights,
        MetricCategory::Monetization,
        MetricCategory::BusinessProfile,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MetricCategory::Overview => "overview",
            MetricCategory::Trends => "trends",
            MetricCategory::ProfileMetrics => "profile_metrics",
            MetricCategory::AudienceInsights => "audience_insights",
            MetricCategory::Monetization => "monetization",
            MetricCategory::BusinessProfile => "business_profile",
        }
    }
}

impl std::fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
