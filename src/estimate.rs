//! Quick aggregate estimate.
//!
//! A calendar-free shortcut for the companion estimate widget: total work
//! spread evenly over the workers. A lone record cannot be parallelized,
//! so its value is returned as-is.

use std::cmp::Ordering;

use crate::analytics::parse_threshold;
use crate::models::ValuedItem;

/// Aggregate estimate in the items' unit.
///
/// Returns `None` when there are no valued items or no workers. When
/// exactly one record was under consideration, the first item's value is
/// returned unmodified; otherwise the sum is divided by `num_workers`.
pub fn calculate_estimate(
    items: &[ValuedItem<'_>],
    total_record_count: usize,
    num_workers: usize,
) -> Option<f64> {
    let first = items.first()?;
    if num_workers < 1 {
        return None;
    }
    if total_record_count == 1 {
        return Some(first.value);
    }
    let sum: f64 = items.iter().map(|i| i.value).sum();
    Some(sum / num_workers as f64)
}

/// Items whose value exceeds the threshold, largest first.
///
/// Same threshold rule as schedule outliers. Equal values keep their
/// input order.
pub fn calculate_estimation_outliers<'a>(
    items: &[ValuedItem<'a>],
    threshold: &str,
) -> Vec<ValuedItem<'a>> {
    let Some(limit) = parse_threshold(threshold) else {
        return Vec::new();
    };
    let mut outliers: Vec<ValuedItem<'a>> = items.iter().filter(|i| i.value > limit).copied().collect();
    outliers.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    outliers
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_estimate_single_record_not_divided() {
        let r = json!({"estimate": 5});
        let items = [ValuedItem::new(&r, 5.0)];
        assert_eq!(calculate_estimate(&items, 1, 3), Some(5.0));
    }

    #[test]
    fn test_estimate_divides_by_workers() {
        let r = json!({});
        let items = [ValuedItem::new(&r, 5.0), ValuedItem::new(&r, 7.0)];
        assert_eq!(calculate_estimate(&items, 2, 4), Some(3.0));
        // One valued item among several records is still divided.
        assert_eq!(calculate_estimate(&items[..1], 10, 5), Some(1.0));
    }

    #[test]
    fn test_estimate_degenerate() {
        let r = json!({});
        assert_eq!(calculate_estimate(&[], 4, 2), None);
        assert_eq!(calculate_estimate(&[ValuedItem::new(&r, 1.0)], 1, 0), None);
    }

    #[test]
    fn test_estimation_outliers_sorted_desc() {
        let r = json!({});
        let items = [
            ValuedItem::new(&r, 4.0),
            ValuedItem::new(&r, 9.0),
            ValuedItem::new(&r, 2.0),
            ValuedItem::new(&r, 6.0),
        ];
        let out = calculate_estimation_outliers(&items, "3");
        let values: Vec<f64> = out.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![9.0, 6.0, 4.0]);
        assert!(calculate_estimation_outliers(&items, "9").is_empty());
        assert!(calculate_estimation_outliers(&items, "x").is_empty());
    }
}
