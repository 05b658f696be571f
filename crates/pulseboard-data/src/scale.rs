//! Proportional scaling of sample figures.

use std::num::NonZeroU64;

/// Ratio of a profile stat to its baseline.
///
/// A zero stat means "no data", not "no audience", and yields `1.0` so the
/// sample figures pass through unchanged. The result is always finite and
/// positive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scale_factor(stat: u64, baseline: NonZeroU64) -> f64 {
    if stat == 0 {
        return 1.0;
    }
    stat as f64 / baseline.get() as f64
}

/// Scales a count and rounds to the nearest integer, halves away from zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn scale_count(count: u64, scale: f64) -> u64 {
    (count as f64 * scale).round() as u64
}
