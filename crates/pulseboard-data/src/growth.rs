use std::collections::BTreeMap;

use serde::Serialize;

use pulseboard_core::{Platform, Profile};

/// Follower counts for the current and previous period of one platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformGrowth {
    pub current: u64,
    pub previous: u64,
    pub growth: f64,
}

pub type FollowerGrowth = BTreeMap<Platform, PlatformGrowth>;

/// Back-computes the previous period's followers from the current count and
/// the growth percentage of each platform on the profile.
///
/// A growth of -100% or below has no finite previous value; `previous` is
/// reported equal to `current` in that case.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn follower_growth(profile: &Profile) -> FollowerGrowth {
    profile
        .platforms
        .iter()
        .map(|(&platform, stats)| {
            let divisor = 1.0 + stats.growth / 100.0;
            let previous = if divisor > 0.0 {
                (stats.followers as f64 / divisor).round() as u64
            } else {
                stats.followers
            };
            (
                platform,
                PlatformGrowth {
                    current: stats.followers,
                    previous,
                    growth: stats.growth,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pulseboard_core::profiles::fallback_profile;
    use pulseboard_core::{PlatformStats, ProfileRegistry};

    use super::*;

    #[test]
    fn demo_user_growth_matches_recorded_periods() {
        let registry = ProfileRegistry::builtin();
        let growth = follower_growth(registry.get("demo_user").unwrap());

        assert_eq!(growth.len(), 3);
        let ig = growth[&Platform::Instagram];
        assert_eq!(ig.current, 45_230);
        // 45_230 / 1.049
        assert_eq!(ig.previous, 43_117);
        let fb = growth[&Platform::Facebook];
        // 67_450 / 0.989
        assert_eq!(fb.previous, 68_200);
        assert!((fb.growth + 1.1).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_user_gets_single_platform() {
        let growth = follower_growth(&fallback_profile("new_creator"));
        assert_eq!(growth.keys().copied().collect::<Vec<_>>(), vec![Platform::Instagram]);
        assert_eq!(growth[&Platform::Instagram].previous, 4_878);
    }

    #[test]
    fn total_loss_does_not_divide_by_zero() {
        let mut profile = fallback_profile("gone");
        profile.platforms.insert(
            Platform::Tiktok,
            PlatformStats {
                followers: 10,
                growth: -100.0,
            },
        );
        let growth = follower_growth(&profile);
        assert_eq!(growth[&Platform::Tiktok].previous, 10);
    }

    #[test]
    fn serializes_with_platform_keys() {
        let growth = follower_growth(&fallback_profile("x"));
        let json = serde_json::to_value(&growth).unwrap();
        assert_eq!(json["instagram"]["current"], 5_000);
    }
}
