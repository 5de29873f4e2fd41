//! Input validation for planning requests.
//!
//! The engine never fails on degenerate input; it returns empty results
//! instead. Validation exists so callers can tell the user *why* a plan
//! came out empty or degenerate. Detects:
//! - Zero workers
//! - Missing estimate field
//! - Calendars with no working day
//! - UTC offsets outside ±24h
//! - Unusable outlier thresholds when the view depends on them

use serde::Serialize;

use crate::analytics::{parse_threshold, ViewMode};
use crate::planner::PlanRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationErrorKind {
    /// Fewer than one worker.
    NoWorkers,
    /// No estimate field selected.
    EmptyField,
    /// Every weekday is a holiday.
    NoWorkingDays,
    /// UTC offset cannot be represented.
    InvalidUtcOffset,
    /// Outlier threshold is not a finite positive number.
    InvalidThreshold,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a planning request.
///
/// Checks:
/// 1. At least one worker
/// 2. A non-empty estimate field name
/// 3. At least one working weekday
/// 4. A representable UTC offset
/// 5. A usable threshold when the outliers view is selected, or when a
///    threshold was entered at all
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &PlanRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.num_workers < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWorkers,
            "At least one worker is required to build a schedule",
        ));
    }

    if request.field_name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyField,
            "No estimate field selected",
        ));
    }

    if request.holidays.is_all_week() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWorkingDays,
            "Every weekday is a holiday; durations are applied without a calendar",
        ));
    }

    if request.calendar().is_err() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidUtcOffset,
            format!(
                "UTC offset of {} minutes is out of range; using UTC",
                request.utc_offset_minutes
            ),
        ));
    }

    let threshold = request.outlier_threshold.trim();
    let needs_threshold = request.view_mode == ViewMode::OutliersOnly || !threshold.is_empty();
    if needs_threshold && parse_threshold(threshold).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidThreshold,
            format!("Outlier threshold '{threshold}' is not a positive number"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
