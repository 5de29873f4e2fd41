//! Error type for the fallible boundary of the planner.
//!
//! The planning engine itself is total: degenerate input yields empty
//! collections or `None`. Errors only arise when parsing user-facing
//! names (strategies, view modes, units), validating holiday weekdays,
//! or loading configuration documents.

use thiserror::Error;

/// Errors raised while parsing planner inputs or configuration.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Weekday number outside `0..=6`.
    #[error("invalid weekday {0}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday(u8),

    /// Unrecognized scheduling strategy name.
    #[error("unknown strategy '{0}': expected largest-first, smallest-first or round-robin")]
    UnknownStrategy(String),

    /// Unrecognized view mode name.
    #[error("unknown view mode '{0}'")]
    UnknownViewMode(String),

    /// Unrecognized time unit name.
    #[error("unknown time unit '{0}'")]
    UnknownUnit(String),

    /// UTC offset outside the range chrono accepts.
    #[error("invalid UTC offset of {0} minutes")]
    InvalidUtcOffset(i32),

    /// Malformed TOML configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Malformed JSON request or configuration.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
