//! Filter parameters accepted by the overview endpoint.

use pulseboard_core::Platform;

/// Platform restriction for aggregate metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    /// Aggregate across every platform. The `platform` parameter is omitted.
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    /// Interprets a filter value coming from the UI.
    ///
    /// `"all"`, the empty string, and any name outside the known platform set
    /// resolve to [`PlatformFilter::All`]. Never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match Platform::from_name(value) {
            Some(platform) => Self::Only(platform),
            None => {
                if !value.trim().is_empty() && !value.trim().eq_ignore_ascii_case("all") {
                    tracing::debug!(
                        platform = value,
                        "unrecognized platform filter, using aggregate"
                    );
                }
                Self::All
            }
        }
    }

    #[must_use]
    pub fn platform(self) -> Option<Platform> {
        match self {
            Self::All => None,
            Self::Only(platform) => Some(platform),
        }
    }
}

impl From<Platform> for PlatformFilter {
    fn from(platform: Platform) -> Self {
        Self::Only(platform)
    }
}

/// Trailing window the overview totals are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
}

impl DateRange {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Last7Days => "7d",
            DateRange::Last30Days => "30d",
            DateRange::Last90Days => "90d",
        }
    }

    /// Parses `"7d"`, `"30d"` or `"90d"`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "7d" => Some(DateRange::Last7Days),
            "30d" => Some(DateRange::Last30Days),
            "90d" => Some(DateRange::Last90Days),
            _ => None,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`crate::DashboardClient::get_overview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewQuery {
    pub platform: PlatformFilter,
    /// `None` asks the backend for all-time totals.
    pub date_range: Option<DateRange>,
}

impl Default for OverviewQuery {
    fn default() -> Self {
        Self {
            platform: PlatformFilter::All,
            date_range: Some(DateRange::default()),
        }
    }
}

impl OverviewQuery {
    #[must_use]
    pub fn with_platform(mut self, platform: PlatformFilter) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, date_range: Option<DateRange>) -> Self {
        self.date_range = date_range;
        self
    }
}
