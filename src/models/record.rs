//! Work item records and numeric field access.
//!
//! Work items are opaque JSON records of arbitrary shape. The engine only
//! needs two things from them: a numeric size estimate for a chosen field
//! and a best-effort display identity (label and identifier).
//!
//! # Field Lookup
//! A field is read directly from the record first. When the direct key is
//! absent or `null`, the nested `customFields` bag is consulted instead.

use serde::Serialize;
use serde_json::Value;

/// Key of the nested bag holding user-defined project fields.
pub const CUSTOM_FIELDS_KEY: &str = "customFields";

/// Label used when a record carries no title-like field.
pub const DEFAULT_LABEL: &str = "Untitled";

/// Identifier used when a record carries no number- or id-like field.
pub const DEFAULT_IDENTIFIER: &str = "N/A";

const LABEL_FIELDS: [&str; 2] = ["title", "name"];
const IDENTIFIER_FIELDS: [&str; 2] = ["number", "id"];

/// Looks up `field_name` on a record, falling back to `customFields`.
///
/// Returns `None` when neither location holds a non-null value, or when
/// the record is not a JSON object.
pub fn lookup_field<'a>(record: &'a Value, field_name: &str) -> Option<&'a Value> {
    let direct = record.get(field_name).filter(|v| !v.is_null());
    direct.or_else(|| {
        record
            .get(CUSTOM_FIELDS_KEY)
            .and_then(|bag| bag.get(field_name))
            .filter(|v| !v.is_null())
    })
}

/// Coerces a raw JSON value to a number.
///
/// Strings use decimal prefix parsing (see [`parse_float`]); booleans map
/// to 1 and 0. Anything else is not a number and yields NaN.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float(s),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Reads a field and coerces it to a finite number.
///
/// Returns `None` for absent, null, unparsable, or non-finite values.
pub fn numeric_field(record: &Value, field_name: &str) -> Option<f64> {
    lookup_field(record, field_name)
        .map(coerce_number)
        .filter(|v| v.is_finite())
}

/// Parses a raw JSON value as a finite number without casting.
///
/// Only numbers and strings with a numeric prefix qualify; booleans do not.
pub fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_float(s),
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Parses the longest decimal prefix of a string.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fractional part, an optional exponent, and the literal
/// `Infinity`. Trailing garbage is ignored (`"12h"` parses as 12).
/// Returns NaN when no numeric prefix exists.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    let negative = len > 0 && bytes[0] == b'-';
    if len > 0 && (bytes[0] == b'+' || bytes[0] == b'-') {
        i = 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < len && bytes[i] == b'.' {
        let mut k = i + 1;
        while k < len && bytes[k].is_ascii_digit() {
            k += 1;
        }
        frac_digits = k - (i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i = k;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut k = i + 1;
        if k < len && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < len && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            i = k;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Display label of a record (`title`, then `name`).
pub fn record_label(record: &Value) -> String {
    first_display(record, &LABEL_FIELDS).unwrap_or_else(|| DEFAULT_LABEL.to_string())
}

/// Display identifier of a record (`number`, then `id`).
pub fn record_identifier(record: &Value) -> String {
    first_display(record, &IDENTIFIER_FIELDS).unwrap_or_else(|| DEFAULT_IDENTIFIER.to_string())
}

fn first_display(record: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|f| lookup_field(record, f))
        .find_map(display_value)
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A work item paired with its extracted numeric estimate.
///
/// Borrows the original record. `value` is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuedItem<'a> {
    /// The original record.
    pub item: &'a Value,
    /// Extracted size estimate in the caller's unit.
    pub value: f64,
}

impl<'a> ValuedItem<'a> {
    /// Pairs a record with its value.
    pub fn new(item: &'a Value, value: f64) -> Self {
        Self { item, value }
    }

    /// Display label of the underlying record.
    pub fn label(&self) -> String {
        record_label(self.item)
    }

    /// Display identifier of the underlying record.
    pub fn identifier(&self) -> String {
        record_identifier(self.item)
    }
}
