//! Response records for each metric category.
//!
//! The backend's JSON is loosely structured: fields the dashboard can live
//! without are `Option` and default when absent, so a partial body still
//! deserializes. Absent options are also skipped on serialization, which keeps
//! the fallback payloads free of `null` noise.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// `GET /api/dashboard/overview`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_shares: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_comments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_engagement: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_posts: Option<u64>,
    /// `(likes + comments + shares) / views`, as a fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<f64>,
}

/// `GET /api/dashboard/trends`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    pub facts: TrendFacts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<PeriodStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<PeriodStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFacts {
    /// Signed percentage, e.g. `"+4.9%"` or `"-1.2%"`.
    pub engagement_change: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_frequency_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_top_content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_platform: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    pub engagement_rate: f64,
    pub post_count: u64,
}

/// `GET /api/creator/profile-metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<MetricCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<MetricCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_retention: Option<MetricCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_sentiment: Option<SentimentBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_format: Option<BestFormat>,
}

/// A headline number with its period-over-period change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub value: MetricValue,
    /// Signed percentage text, e.g. `"+2.1%"`.
    pub growth: String,
}

/// The backend sends raw counts for some cards and pre-formatted text for
/// others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Renders numeric values in the dashboard's compact form; text is kept.
    ///
    /// Fractional numbers are rounded to a whole count first; negatives clamp to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn into_compact(self) -> Self {
        match self {
            MetricValue::Count(n) => MetricValue::Text(format_compact(n)),
            MetricValue::Number(x) => {
                MetricValue::Text(format_compact(x.round().max(0.0) as u64))
            }
            text @ MetricValue::Text(_) => text,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Compact form of a count: `45230` -> `"45.2K"`, `950` -> `"950"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_compact(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}K", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

/// Share of positive, negative and neutral mentions, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestFormat {
    pub name: String,
    /// Percentage text, e.g. `"12.3%"`.
    pub performance: String,
}

/// `GET /api/creator/audience-insights`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceInsights {
    /// Platform wire name -> monthly follower snapshots, oldest first.
    #[serde(default)]
    pub growth_timeline: BTreeMap<String, Vec<FollowerPoint>>,
    pub composition: AudienceComposition,
    #[serde(default)]
    pub behavior: BTreeMap<String, PlatformBehavior>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerPoint {
    /// Three-letter month label, e.g. `"Aug"`.
    pub month: String,
    pub followers: u64,
}

/// Returning vs. new viewers, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceComposition {
    pub returning: u32,
    pub new: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBehavior {
    pub avg_session_duration: String,
    pub bounce_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_per_session: Option<f64>,
    pub returning_rate: f64,
}

/// `GET /api/creator/monetization`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monetization {
    pub revenue: Revenue,
    #[serde(default)]
    pub content_performance: Vec<ContentRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub total: u64,
    /// Period-over-period change in percent.
    pub growth: f64,
    /// Platform wire name -> revenue.
    #[serde(default)]
    pub platforms: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRevenue {
    #[serde(rename = "type")]
    pub content_type: String,
    pub revenue: u64,
    /// Conversion rate in percent.
    pub conversion: f64,
    pub platform: String,
}

/// `GET /api/business/profile`
///
/// The backend answers `{}` for an unknown user, so every field defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(
        default,
        rename = "business_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, alias = "companyUrl", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_owner_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub leads: Vec<BusinessLead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_settings: Option<VisibilitySettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_budget: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_budget: Option<u64>,
}

impl BusinessProfile {
    /// True for the `{}` body the backend returns when the user has no
    /// business record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The backend passes database columns through as-is, so a `NULL` column
/// arrives as `null` rather than as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLead {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct VisibilitySettings {
    pub show_company_name: bool,
    pub show_domain: bool,
    pub show_bio: bool,
    pub show_leads: bool,
    pub show_logo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_value_accepts_count_number_and_text() {
        let count: MetricValue = serde_json::from_str("45230").unwrap();
        assert_eq!(count, MetricValue::Count(45_230));
        let number: MetricValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(number, MetricValue::Number(12.5));
        let text: MetricValue = serde_json::from_str("\"8.5%\"").unwrap();
        assert_eq!(text, MetricValue::Text("8.5%".to_owned()));
    }

    #[test]
    fn compact_formatting() {
        assert_eq!(format_compact(45_230), "45.2K");
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(0), "0");
        assert_eq!(
            MetricValue::Count(128_900).into_compact(),
            MetricValue::Text("128.9K".to_owned())
        );
        assert_eq!(
            MetricValue::Text("96.8%".to_owned()).into_compact(),
            MetricValue::Text("96.8%".to_owned())
        );
    }

    #[test]
    fn fractional_numbers_compact_as_whole_counts() {
        assert_eq!(
            MetricValue::Number(999.4).into_compact(),
            MetricValue::Text("999".to_owned())
        );
        assert_eq!(
            MetricValue::Number(999.6).into_compact(),
            MetricValue::Text("1.0K".to_owned())
        );
        assert_eq!(
            MetricValue::Number(-3.0).into_compact(),
            MetricValue::Text("0".to_owned())
        );
    }

    #[test]
    fn business_profile_accepts_null_leads() {
        let profile: BusinessProfile = serde_json::from_value(serde_json::json!({
            "business_id": "b-9",
            "companyName": "Real Co",
            "leads": null,
            "visibilitySettings": null
        }))
        .unwrap();
        assert_eq!(profile.company_name.as_deref(), Some("Real Co"));
        assert!(profile.leads.is_empty());
        assert_eq!(profile.visibility_settings, None);
    }

    #[test]
    fn overview_tolerates_partial_bodies() {
        let overview: Overview =
            serde_json::from_value(serde_json::json!({ "total_views": 10 })).unwrap();
        assert_eq!(overview.total_views, Some(10));
        assert_eq!(overview.total_likes, None);
        let back = serde_json::to_value(&overview).unwrap();
        assert_eq!(back, serde_json::json!({ "total_views": 10 }));
    }

    #[test]
    fn empty_business_profile_is_empty() {
        let profile: BusinessProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn business_profile_reads_backend_and_sample_keys() {
        let profile: BusinessProfile = serde_json::from_value(serde_json::json!({
            "business_id": "b-1",
            "companyName": "Acme",
            "companyUrl": "https://acme.test",
            "visibilitySettings": { "showBio": true }
        }))
        .unwrap();
        assert_eq!(profile.business_id.as_deref(), Some("b-1"));
        assert_eq!(profile.website.as_deref(), Some("https://acme.test"));
        let vis = profile.visibility_settings.unwrap();
        assert!(vis.show_bio);
        assert!(!vis.show_logo);
    }

    #[test]
    fn content_revenue_uses_type_key() {
        let row = ContentRevenue {
            content_type: "Reels".to_owned(),
            revenue: 3200,
            conversion: 4.2,
            platform: "Instagram".to_owned(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["type"], "Reels");
    }
}
