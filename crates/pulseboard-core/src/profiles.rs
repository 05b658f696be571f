//! Read-only registry of creator profiles, keyed by username.
//!
//! Lookups for usernames outside the registry never fail: [`ProfileRegistry::resolve`]
//! synthesizes a placeholder profile from the username itself.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Niche {
    pub primary: String,
    pub secondary: Vec<String>,
}

/// Lifetime totals across all platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_likes: u64,
    pub total_shares: u64,
    pub total_views: u64,
    /// Pre-formatted percentage, e.g. `"8.5%"`.
    pub engagement_rate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub followers: u64,
    /// Period-over-period follower growth in percent. May be negative.
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub niche: Niche,
    pub stats: ProfileStats,
    pub platforms: BTreeMap<Platform, PlatformStats>,
}

impl Profile {
    #[must_use]
    pub fn platform(&self, platform: Platform) -> Option<&PlatformStats> {
        self.platforms.get(&platform)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Profile>,
}

static BUILTIN: LazyLock<Arc<ProfileRegistry>> =
    LazyLock::new(|| Arc::new(ProfileRegistry::from_profiles(builtin_profiles())));

impl ProfileRegistry {
    /// Build a registry from `(username, profile)` pairs. Later duplicates win.
    pub fn from_profiles<I, K>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (K, Profile)>,
        K: Into<String>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|(username, profile)| (username.into(), profile))
                .collect(),
        }
    }

    /// The process-wide registry of sample creators, built on first use.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&Profile> {
        self.profiles.get(username)
    }

    /// Returns the registered profile, or a synthesized default for unknown
    /// usernames.
    #[must_use]
    pub fn resolve(&self, username: &str) -> Cow<'_, Profile> {
        match self.get(username) {
            Some(profile) => Cow::Borrowed(profile),
            None => Cow::Owned(fallback_profile(username)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

/// Placeholder profile for a username with no registry entry.
///
/// Deterministic in `username`; stats and platforms are fixed placeholders.
#[must_use]
pub fn fallback_profile(username: &str) -> Profile {
    Profile {
        id: format!("fallback-{username}"),
        name: display_name_from_username(username),
        bio: "Content creator specializing in various domains.".to_string(),
        niche: Niche {
            primary: "General".to_string(),
            secondary: vec!["Content Creation".to_string()],
        },
        stats: ProfileStats {
            total_likes: 10_000,
            total_shares: 1_000,
            total_views: 50_000,
            engagement_rate: "5.0%".to_string(),
        },
        platforms: BTreeMap::from([(
            Platform::Instagram,
            PlatformStats {
                followers: 5_000,
                growth: 2.5,
            },
        )]),
    }
}

/// `"jane_doe"` -> `"Jane Doe"`. Only the first character of each
/// underscore-separated segment is changed.
#[must_use]
pub fn display_name_from_username(username: &str) -> String {
    username
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn profile(
    id: &str,
    name: &str,
    bio: &str,
    niche: (&str, &[&str]),
    stats: (u64, u64, u64, &str),
    platforms: &[(Platform, u64, f64)],
) -> Profile {
    let (total_likes, total_shares, total_views, engagement_rate) = stats;
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        niche: Niche {
            primary: niche.0.to_string(),
            secondary: niche.1.iter().map(|s| (*s).to_string()).collect(),
        },
        stats: ProfileStats {
            total_likes,
            total_shares,
            total_views,
            engagement_rate: engagement_rate.to_string(),
        },
        platforms: platforms
            .iter()
            .map(|&(platform, followers, growth)| (platform, PlatformStats { followers, growth }))
            .collect(),
    }
}

fn builtin_profiles() -> Vec<(&'static str, Profile)> {
    vec![
        (
            "demo_user",
            profile(
                "95563f19-3466-48c9-a05b-540220aa6d2b",
                "John Doe",
                "Tech enthusiast and content creator.",
                ("Tech", &["AI", "SaaS"]),
                (145_230, 23_450, 892_340, "8.5%"),
                &[
                    (Platform::Instagram, 45_230, 4.9),
                    (Platform::Youtube, 128_900, 2.9),
                    (Platform::Facebook, 67_450, -1.1),
                ],
            ),
        ),
        (
            "sarah_c",
            profile(
                "sarah-id-123",
                "Sarah Creator",
                "Lifestyle and travel vlogger.",
                ("Lifestyle", &["Travel", "Fashion"]),
                (285_400, 12_100, 1_540_000, "12.2%"),
                &[
                    (Platform::Instagram, 120_500, 8.2),
                    (Platform::Youtube, 85_000, 5.4),
                    (Platform::Tiktok, 230_000, 15.1),
                ],
            ),
        ),
        (
            "tech_guru",
            profile(
                "tech-id-456",
                "Alex Tech Explorer",
                "Breaking down complex tech for everyone.",
                ("Education", &["Tech", "Coding"]),
                (56_000, 45_000, 520_000, "15.5%"),
                &[
                    (Platform::Youtube, 45_000, 12.8),
                    (Platform::Twitter, 15_000, 4.5),
                    (Platform::Linkedin, 8_000, 2.1),
                ],
            ),
        ),
    ]
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
