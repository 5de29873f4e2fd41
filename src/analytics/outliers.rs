//! Outlier detection against a user-entered threshold.

use crate::models::{parse_float, ScheduledTask};

/// Parses a user-entered threshold.
///
/// Uses decimal prefix parsing; only finite, strictly positive values are
/// accepted.
pub fn parse_threshold(threshold: &str) -> Option<f64> {
    let value = parse_float(threshold);
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Tasks whose duration is strictly greater than the threshold.
///
/// An unparsable or non-positive threshold yields no outliers.
pub fn calculate_outliers<'a>(tasks: &[ScheduledTask<'a>], threshold: &str) -> Vec<ScheduledTask<'a>> {
    let Some(limit) = parse_threshold(threshold) else {
        return Vec::new();
    };
    tasks
        .iter()
        .filter(|t| t.duration > limit)
        .cloned()
        .collect()
}
