//! Substitute payloads for failed API calls.
//!
//! Each builder returns the same record type the API would have returned.
//! Counts are scaled by the profile's size relative to [`Baselines`] and
//! rounded; rates and percentages are kept as recorded.

use std::collections::BTreeMap;

use pulseboard_api::types::format_compact;
use pulseboard_api::{
    AudienceComposition, AudienceInsights, BestFormat, ContentRevenue, FollowerPoint, MetricCard,
    MetricValue, Monetization, Overview, PlatformBehavior, ProfileMetrics, Revenue,
    SentimentBreakdown, TrendFacts, Trends,
};
use pulseboard_core::{Baselines, Platform, Profile};

use crate::sample;
use crate::scale::{scale_count, scale_factor};

/// Scale applied to overview figures: total likes against the likes baseline.
#[must_use]
pub fn overview_scale(profile: &Profile, baselines: &Baselines) -> f64 {
    scale_factor(profile.stats.total_likes, baselines.likes)
}

/// Scale applied to view-driven figures: total views against the views baseline.
#[must_use]
pub fn views_scale(profile: &Profile, baselines: &Baselines) -> f64 {
    scale_factor(profile.stats.total_views, baselines.views)
}

#[must_use]
pub fn overview(profile: &Profile, baselines: &Baselines) -> Overview {
    let scale = overview_scale(profile, baselines);
    Overview {
        total_likes: Some(scale_count(sample::TOTAL_LIKES, scale)),
        total_shares: Some(scale_count(sample::TOTAL_SHARES, scale)),
        total_views: Some(scale_count(sample::TOTAL_REACH, scale)),
        ..Overview::default()
    }
}

/// Trend facts derived from the profile's Instagram growth. A missing or
/// zero growth reports the default instead.
#[must_use]
pub fn trends(profile: &Profile) -> Trends {
    let growth = profile
        .platform(Platform::Instagram)
        .map(|p| p.growth)
        .filter(|g| *g != 0.0)
        .unwrap_or(sample::DEFAULT_TREND_GROWTH);

    Trends {
        facts: TrendFacts {
            engagement_change: format!("{growth}%"),
            posting_frequency_change: None,
            top_content_type: None,
            previous_top_content_type: None,
            top_platform: Some(sample::TREND_TOP_PLATFORM.label().to_owned()),
        },
        current: None,
        previous: None,
    }
}

#[must_use]
pub fn profile_metrics(profile: &Profile, baselines: &Baselines) -> ProfileMetrics {
    let scale = views_scale(profile, baselines);
    let instagram = profile.platform(Platform::Instagram);
    let followers = instagram.map_or(0, |p| p.followers);
    let growth = instagram.map_or(0.0, |p| p.growth);
    let (retention, retention_growth) = sample::AUDIENCE_RETENTION;
    let (positive, negative, neutral) = sample::AUDIENCE_SENTIMENT;

    let follower_value = format_compact(followers);

    ProfileMetrics {
        follower_count: Some(MetricCard {
            value: MetricValue::Text(follower_value),
            growth: signed_percent(growth),
        }),
        engagement_rate: Some(MetricCard {
            value: MetricValue::Text(profile.stats.engagement_rate.clone()),
            growth: sample::ENGAGEMENT_RATE_GROWTH.to_owned(),
        }),
        audience_retention: Some(MetricCard {
            value: MetricValue::Text(retention.to_owned()),
            growth: retention_growth.to_owned(),
        }),
        audience_sentiment: Some(SentimentBreakdown {
            positive,
            negative,
            neutral,
        }),
        best_format: Some(BestFormat {
            name: sample::BEST_FORMAT_NAME.to_owned(),
            performance: format!("{:.1}%", sample::BEST_FORMAT_PERFORMANCE * scale),
        }),
    }
}

#[must_use]
pub fn audience_insights(profile: &Profile, baselines: &Baselines) -> AudienceInsights {
    let scale = views_scale(profile, baselines);

    let growth_timeline: BTreeMap<String, Vec<FollowerPoint>> = sample::FOLLOWER_TIMELINE
        .iter()
        .map(|(platform, points)| {
            let scaled: Vec<FollowerPoint> = points
                .iter()
                .map(|&(month, followers)| FollowerPoint {
                    month: month.to_owned(),
                    followers: scale_count(followers, scale),
                })
                .collect();
            (platform.as_str().to_owned(), scaled)
        })
        .collect();

    let (returning, new) = sample::AUDIENCE_COMPOSITION;

    let behavior: BTreeMap<String, PlatformBehavior> = sample::PLATFORM_BEHAVIOR
        .iter()
        .map(|row| {
            (
                row.platform.as_str().to_owned(),
                PlatformBehavior {
                    avg_session_duration: row.avg_session_duration.to_owned(),
                    bounce_rate: row.bounce_rate,
                    pages_per_session: Some(row.pages_per_session),
                    returning_rate: row.returning_rate,
                },
            )
        })
        .collect();

    AudienceInsights {
        growth_timeline,
        composition: AudienceComposition { returning, new },
        behavior,
    }
}

#[must_use]
pub fn monetization(profile: &Profile, baselines: &Baselines) -> Monetization {
    let scale = views_scale(profile, baselines);

    let platforms: BTreeMap<String, u64> = sample::REVENUE_BY_PLATFORM
        .iter()
        .map(|&(platform, revenue)| (platform.as_str().to_owned(), scale_count(revenue, scale)))
        .collect();

    let content_performance: Vec<ContentRevenue> = sample::CONTENT_REVENUE
        .iter()
        .map(|&(content_type, revenue, conversion, platform)| ContentRevenue {
            content_type: content_type.to_owned(),
            revenue: scale_count(revenue, scale),
            conversion,
            platform: platform.label().to_owned(),
        })
        .collect();

    Monetization {
        revenue: Revenue {
            total: scale_count(sample::REVENUE_TOTAL, scale),
            growth: sample::REVENUE_GROWTH,
            platforms,
        },
        content_performance,
    }
}

/// `4.9` -> `"+4.9%"`, `-1.1` -> `"-1.1%"`.
fn signed_percent(value: f64) -> String {
    if value < 0.0 {
        format!("{value}%")
    } else {
        format!("+{value}%")
    }
}
