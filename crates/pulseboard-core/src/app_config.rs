use std::num::NonZeroU64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

const fn non_zero(value: u64) -> NonZeroU64 {
    match NonZeroU64::new(value) {
        Some(v) => v,
        None => panic!("baseline constants must be non-zero"),
    }
}

/// Denominators used to scale sample data to a profile's size.
///
/// Both values are the totals of the sample profile the fallback catalog was
/// recorded from. They are configuration, not derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baselines {
    /// Total likes of the sample profile. Scales the overview fallback.
    pub likes: NonZeroU64,
    /// Total views of the sample profile. Scales profile-metrics,
    /// audience-insights and monetization fallbacks.
    pub views: NonZeroU64,
}

impl Baselines {
    pub const DEFAULT_LIKES: NonZeroU64 = non_zero(145_230);
    pub const DEFAULT_VIEWS: NonZeroU64 = non_zero(892_340);
}

impl Default for Baselines {
    fn default() -> Self {
        Self {
            likes: Self::DEFAULT_LIKES,
            views: Self::DEFAULT_VIEWS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Deployment environment, read by the embedding app. The crates here
    /// behave the same in every environment.
    pub env: Environment,
    /// Filter directive for the embedding app's tracing subscriber. The
    /// crates only emit events and never install a subscriber.
    pub log_level: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub baselines: Baselines,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            user_agent: "pulseboard/0.1 (creator-analytics)".to_string(),
            baselines: Baselines::default(),
        }
    }
}
