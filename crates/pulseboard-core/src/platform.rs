use serde::{Deserialize, Serialize};

/// Social platforms the dashboard knows how to break metrics down by.
///
/// Declaration order is the display order; `BTreeMap<Platform, _>` iterates
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Facebook,
    Tiktok,
    Twitter,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Youtube,
        Platform::Facebook,
        Platform::Tiktok,
        Platform::Twitter,
        Platform::Linkedin,
    ];

    /// Lower-case wire name, as used in query strings and JSON keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
        }
    }

    /// Human-facing label (`"YouTube"`, `"TikTok"`, ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Tiktok => "TikTok",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
        }
    }

    /// Case-insensitive lookup by wire name. Returns `None` for anything
    /// outside the known set, including `"all"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
