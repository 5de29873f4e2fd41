//! Numeric field detection and value extraction.
//!
//! # Field Inspection
//! Numeric-ness is decided by sampling: a candidate field qualifies when
//! at least one of the first few records holds a number, or a string that
//! parses to a finite number. Booleans are not numbers here.
//! Fields whose numeric values only appear beyond the sample are missed,
//! and fields with a single numeric value among text are admitted.
//!
//! # Extraction
//! Values are read with [`lookup_field`] (direct key, then
//! `customFields`) and coerced with [`coerce_number`]. Records without a
//! usable value are skipped; input order is preserved.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::models::{lookup_field, numeric_field, parse_number, ValuedItem};

/// Records sampled per candidate field by default.
pub const DEFAULT_FIELD_SAMPLE_SIZE: usize = 5;

/// Options for [`extract_values`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Skip values `<= 0`.
    pub require_positive: bool,
}

impl ExtractOptions {
    /// Only keep strictly positive values.
    pub fn positive() -> Self {
        Self {
            require_positive: true,
        }
    }
}

/// Returns the candidate fields that hold numbers, sorted by name.
///
/// Samples the first [`DEFAULT_FIELD_SAMPLE_SIZE`] records.
pub fn numeric_fields<I>(records: &[Value], candidates: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    numeric_fields_sampled(records, candidates, DEFAULT_FIELD_SAMPLE_SIZE)
}

/// [`numeric_fields`] with an explicit sample size.
pub fn numeric_fields_sampled<I>(records: &[Value], candidates: I, sample_size: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if records.is_empty() {
        return Vec::new();
    }

    let sample = &records[..records.len().min(sample_size)];
    let qualifying: BTreeSet<String> = candidates
        .into_iter()
        .filter(|name| {
            let name = name.as_ref();
            sample
                .iter()
                .any(|r| lookup_field(r, name).and_then(parse_number).is_some())
        })
        .map(|name| name.as_ref().to_string())
        .collect();

    debug!(
        sampled = sample.len(),
        numeric = qualifying.len(),
        "inspected candidate fields"
    );
    qualifying.into_iter().collect()
}

/// Extracts a finite numeric value per record for `field_name`.
///
/// Returns an empty list for an empty field name.
pub fn extract_values<'a>(
    field_name: &str,
    records: &'a [Value],
    options: ExtractOptions,
) -> Vec<ValuedItem<'a>> {
    if field_name.is_empty() {
        return Vec::new();
    }

    let items: Vec<ValuedItem<'a>> = records
        .iter()
        .filter_map(|record| {
            let value = numeric_field(record, field_name)?;
            if options.require_positive && value <= 0.0 {
                return None;
            }
            Some(ValuedItem::new(record, value))
        })
        .collect();

    debug!(
        field = field_name,
        records = records.len(),
        valued = items.len(),
        "extracted field values"
    );
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Value> {
        vec![
            json!({"title": "A", "estimate": 3, "status": "open"}),
            json!({"title": "B", "estimate": "5", "customFields": {"Days": "2.5"}}),
            json!({"title": "C", "estimate": null, "customFields": {"estimate": 0}}),
            json!({"title": "D", "estimate": -1}),
            json!({"title": "E", "estimate": "TBD"}),
        ]
    }

    #[test]
    fn test_numeric_fields_sorted() {
        let recs = records();
        let fields = numeric_fields(&recs, ["status", "estimate", "Days", "missing"]);
        assert_eq!(fields, vec!["Days".to_string(), "estimate".to_string()]);
    }

    #[test]
    fn test_numeric_fields_sample_limit() {
        let mut recs: Vec<Value> = (0..5).map(|_| json!({"late": "x"})).collect();
        recs.push(json!({"late": 4}));
        assert!(numeric_fields(&recs, ["late"]).is_empty());
        assert_eq!(numeric_fields_sampled(&recs, ["late"], 6), vec!["late"]);
    }

    #[test]
    fn test_numeric_fields_skip_booleans() {
        let recs = vec![json!({"title": "a", "locked": false, "closed": true})];
        assert!(numeric_fields(&recs, ["closed", "locked", "title"]).is_empty());
    }

    #[test]
    fn test_numeric_fields_empty() {
        assert!(numeric_fields(&[], ["estimate"]).is_empty());
        let recs = records();
        assert!(numeric_fields(&recs, Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_extract_values_preserves_order() {
        let recs = records();
        let items = extract_values("estimate", &recs, ExtractOptions::default());
        let values: Vec<f64> = items.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![3.0, 5.0, 0.0, -1.0]);
        assert_eq!(items[2].label(), "C");
    }

    #[test]
    fn test_extract_values_require_positive() {
        let recs = records();
        let items = extract_values("estimate", &recs, ExtractOptions::positive());
        let values: Vec<f64> = items.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![3.0, 5.0]);
    }

    #[test]
    fn test_extract_values_degenerate() {
        let recs = records();
        assert!(extract_values("", &recs, ExtractOptions::default()).is_empty());
        assert!(extract_values("estimate", &[], ExtractOptions::default()).is_empty());
    }
}
