//! Planner configuration.
//!
//! Tunables for the two heuristics the engine relies on: how many records
//! are sampled when deciding whether a field is numeric, and how close to
//! the makespan a finish must be to count as critical.
//!
//! ```toml
//! field_sample_size = 5
//! critical_path_tolerance_ms = 1000
//! ```

use serde::{Deserialize, Serialize};

use crate::analytics::CRITICAL_PATH_TOLERANCE_MS;
use crate::error::Result;
use crate::fields::DEFAULT_FIELD_SAMPLE_SIZE;

/// Engine tunables. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Records sampled per candidate field.
    pub field_sample_size: usize,
    /// Critical-path tolerance band (ms).
    pub critical_path_tolerance_ms: i64,
}

impl PlannerConfig {
    /// Parses a TOML document.
    ///
    /// Errors surface as [`PlannerError::Config`](crate::PlannerError::Config).
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a JSON document.
    ///
    /// Errors surface as [`PlannerError::Json`](crate::PlannerError::Json).
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Sets the field sample size.
    pub fn with_field_sample_size(mut self, n: usize) -> Self {
        self.field_sample_size = n;
        self
    }

    /// Sets the critical-path tolerance.
    pub fn with_critical_path_tolerance_ms(mut self, ms: i64) -> Self {
        self.critical_path_tolerance_ms = ms;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            field_sample_size: DEFAULT_FIELD_SAMPLE_SIZE,
            critical_path_tolerance_ms: CRITICAL_PATH_TOLERANCE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    #[test]
    fn test_defaults() {
        let c = PlannerConfig::default();
        assert_eq!(c.field_sample_size, 5);
        assert_eq!(c.critical_path_tolerance_ms, 1000);
    }

    #[test]
    fn test_from_toml_partial() {
        let c = PlannerConfig::from_toml_str("critical_path_tolerance_ms = 250\n").unwrap();
        assert_eq!(c.critical_path_tolerance_ms, 250);
        assert_eq!(c.field_sample_size, 5);
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = PlannerConfig::from_toml_str("field_sample_size = \"many\"").unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_from_json() {
        let c = PlannerConfig::from_json_str(r#"{"field_sample_size": 10}"#).unwrap();
        assert_eq!(c, PlannerConfig::default().with_field_sample_size(10));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PlannerConfig::from_json_str(r#"{"field_sample_size": "many"}"#).unwrap_err();
        assert!(matches!(err, PlannerError::Json(_)));
    }
}
