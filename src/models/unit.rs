//! Time units and duration conversion.
//!
//! Size estimates carry a semantic unit inferred from the field's display
//! name. Conversion to milliseconds uses fixed factors; a month is always
//! 30 days, not a calendar month. The generic `units` fallback converts
//! as hours in both directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: f64 = 3_600_000.0;
/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
/// Milliseconds in one week.
pub const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;
/// Milliseconds in one (fixed, 30-day) month.
pub const MS_PER_MONTH: f64 = 30.0 * MS_PER_DAY;

/// Semantic unit of a size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Days,
    Weeks,
    Months,
    /// Unitless estimate (story points etc.). Converted as hours.
    #[default]
    Units,
}

impl TimeUnit {
    /// Infers the unit from a field display name.
    ///
    /// Case-insensitive substring match checked in the order
    /// day, hour, week, month; first match wins.
    ///
    /// ```
    /// use u_timeline::models::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::from_field_name("Estimate (Days)"), TimeUnit::Days);
    /// assert_eq!(TimeUnit::from_field_name("Story Points"), TimeUnit::Units);
    /// ```
    pub fn from_field_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("day") {
            TimeUnit::Days
        } else if lower.contains("hour") {
            TimeUnit::Hours
        } else if lower.contains("week") {
            TimeUnit::Weeks
        } else if lower.contains("month") {
            TimeUnit::Months
        } else {
            TimeUnit::Units
        }
    }

    /// Milliseconds per one unit.
    #[inline]
    pub fn ms_per_unit(self) -> f64 {
        match self {
            TimeUnit::Hours | TimeUnit::Units => MS_PER_HOUR,
            TimeUnit::Days => MS_PER_DAY,
            TimeUnit::Weeks => MS_PER_WEEK,
            TimeUnit::Months => MS_PER_MONTH,
        }
    }

    /// Lowercase name of the unit.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Units => "units",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hours" => Ok(TimeUnit::Hours),
            "days" => Ok(TimeUnit::Days),
            "weeks" => Ok(TimeUnit::Weeks),
            "months" => Ok(TimeUnit::Months),
            "units" => Ok(TimeUnit::Units),
            _ => Err(PlannerError::UnknownUnit(s.to_string())),
        }
    }
}

/// Converts a value in `unit` to milliseconds.
#[inline]
pub fn convert_to_ms(value: f64, unit: TimeUnit) -> f64 {
    value * unit.ms_per_unit()
}

/// Converts milliseconds to a value in `unit`.
#[inline]
pub fn convert_from_ms(ms: f64, unit: TimeUnit) -> f64 {
    ms / unit.ms_per_unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_inference_order() {
        assert_eq!(TimeUnit::from_field_name("Hours Spent"), TimeUnit::Hours);
        assert_eq!(TimeUnit::from_field_name("WEEKS"), TimeUnit::Weeks);
        assert_eq!(TimeUnit::from_field_name("Effort (months)"), TimeUnit::Months);
        // "day" is checked before "hour"
        assert_eq!(TimeUnit::from_field_name("Hours per day"), TimeUnit::Days);
        assert_eq!(TimeUnit::from_field_name("Points"), TimeUnit::Units);
        assert_eq!(TimeUnit::from_field_name(""), TimeUnit::Units);
    }

    #[test]
    fn test_conversion_factors() {
        assert_eq!(convert_to_ms(1.0, TimeUnit::Hours), 3_600_000.0);
        assert_eq!(convert_to_ms(1.0, TimeUnit::Days), 86_400_000.0);
        assert_eq!(convert_to_ms(1.0, TimeUnit::Weeks), 604_800_000.0);
        assert_eq!(convert_to_ms(1.0, TimeUnit::Months), 2_592_000_000.0);
        assert_eq!(convert_to_ms(2.0, TimeUnit::Units), 7_200_000.0);
    }

    #[test]
    fn test_conversion_inverse() {
        for unit in [
            TimeUnit::Hours,
            TimeUnit::Days,
            TimeUnit::Weeks,
            TimeUnit::Months,
            TimeUnit::Units,
        ] {
            for v in [0.0, 0.5, 1.0, 3.0, 16.0, 250.0] {
                assert_eq!(convert_from_ms(convert_to_ms(v, unit), unit), v);
            }
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Days".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert_eq!(TimeUnit::Weeks.to_string(), "weeks");
        assert!("fortnights".parse::<TimeUnit>().is_err());
    }
}
