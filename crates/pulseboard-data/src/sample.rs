//! Sample dataset the fallback payloads are scaled from.
//!
//! Recorded from one mid-sized creator account; see [`pulseboard_core::Baselines`]
//! for the totals it is normalized against.

use pulseboard_api::{BusinessLead, BusinessProfile, VisibilitySettings};
use pulseboard_core::Platform;

pub const TOTAL_LIKES: u64 = 145_230;
pub const TOTAL_SHARES: u64 = 23_450;
pub const TOTAL_REACH: u64 = 892_340;

/// Trend growth reported when the profile has no Instagram account.
pub const DEFAULT_TREND_GROWTH: f64 = 5.0;
pub const TREND_TOP_PLATFORM: Platform = Platform::Instagram;

pub const ENGAGEMENT_RATE_GROWTH: &str = "+2.1%";
pub const AUDIENCE_RETENTION: (&str, &str) = ("96.8%", "+0.8%");
/// Positive, negative, neutral.
pub const AUDIENCE_SENTIMENT: (f64, f64, f64) = (78.5, 12.3, 9.2);
pub const BEST_FORMAT_NAME: &str = "Long-form Videos";
/// Engagement of the best format, in percent.
pub const BEST_FORMAT_PERFORMANCE: f64 = 12.3;

pub const FOLLOWER_TIMELINE: &[(Platform, &[(&str, u64)])] = &[
    (
        Platform::Instagram,
        &[
            ("Aug", 38_200),
            ("Sep", 39_800),
            ("Oct", 41_500),
            ("Nov", 42_900),
            ("Dec", 44_100),
            ("Jan", 45_230),
        ],
    ),
    (
        Platform::Youtube,
        &[
            ("Aug", 115_200),
            ("Sep", 118_500),
            ("Oct", 121_800),
            ("Nov", 124_200),
            ("Dec", 126_500),
            ("Jan", 128_900),
        ],
    ),
    (
        Platform::Facebook,
        &[
            ("Aug", 71_200),
            ("Sep", 70_800),
            ("Oct", 69_900),
            ("Nov", 68_900),
            ("Dec", 68_100),
            ("Jan", 67_450),
        ],
    ),
];

/// Returning and new audience share, in percent.
pub const AUDIENCE_COMPOSITION: (u32, u32) = (68, 32);

pub struct BehaviorRow {
    pub platform: Platform,
    pub avg_session_duration: &'static str,
    pub bounce_rate: f64,
    pub pages_per_session: f64,
    pub returning_rate: f64,
}

pub const PLATFORM_BEHAVIOR: &[BehaviorRow] = &[
    BehaviorRow {
        platform: Platform::Instagram,
        avg_session_duration: "4.2 min",
        bounce_rate: 32.0,
        pages_per_session: 3.8,
        returning_rate: 72.0,
    },
    BehaviorRow {
        platform: Platform::Youtube,
        avg_session_duration: "12.5 min",
        bounce_rate: 28.0,
        pages_per_session: 2.1,
        returning_rate: 65.0,
    },
    BehaviorRow {
        platform: Platform::Facebook,
        avg_session_duration: "3.1 min",
        bounce_rate: 45.0,
        pages_per_session: 2.4,
        returning_rate: 58.0,
    },
];

pub const REVENUE_TOTAL: u64 = 8_700;
pub const REVENUE_GROWTH: f64 = 6.2;
pub const REVENUE_BY_PLATFORM: &[(Platform, u64)] = &[
    (Platform::Instagram, 2_890),
    (Platform::Youtube, 4_250),
    (Platform::Facebook, 1_560),
];

/// Content type, revenue, conversion percent, platform.
pub const CONTENT_REVENUE: &[(&str, u64, f64, Platform)] = &[
    ("Long-form Videos", 4_100, 5.8, Platform::Youtube),
    ("Reels", 3_200, 4.2, Platform::Instagram),
    ("Carousels", 1_800, 3.1, Platform::Instagram),
];

/// Sample business account shown when the business profile endpoint fails.
#[must_use]
pub fn business_profile() -> BusinessProfile {
    BusinessProfile {
        business_id: None,
        company_name: Some("TechVenture Marketing".to_owned()),
        website: Some("https://techventure.com".to_owned()),
        company_logo: Some("https://logo.clearbit.com/google.com".to_owned()),
        domain: Some("Tech".to_owned()),
        bio: Some(
            "Leading marketing agency specializing in tech product launches and influencer \
             partnerships. We connect innovative brands with authentic voices."
                .to_owned(),
        ),
        account_owner_role: None,
        social_links: None,
        leads: vec![
            BusinessLead {
                name: "Jennifer Martinez".to_owned(),
                title: Some("Head of Creator Partnerships".to_owned()),
                email: Some("jennifer@techventure.com".to_owned()),
                phone: Some("+1 (555) 123-4567".to_owned()),
            },
            BusinessLead {
                name: "David Chen".to_owned(),
                title: Some("Campaign Strategy Director".to_owned()),
                email: Some("david@techventure.com".to_owned()),
                phone: Some("+1 (555) 987-6543".to_owned()),
            },
        ],
        visibility_settings: Some(VisibilitySettings {
            show_company_name: true,
            show_domain: true,
            show_bio: true,
            show_leads: true,
            show_logo: true,
        }),
        email: None,
        display_name: None,
        total_budget: Some(150_000),
        allocated_budget: Some(48_000),
        available_budget: Some(102_000),
    }
}
