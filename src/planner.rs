//! End-to-end planning pipeline.
//!
//! Runs the full flow for one set of UI parameters: extract values for the
//! chosen field, resolve the unit, schedule, then derive outliers,
//! workload, critical path, the visible slice, and the makespan. Nothing
//! is cached; each call recomputes from scratch.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use u_timeline::{PlanRequest, Planner};
//!
//! let records = vec![
//!     json!({"title": "a", "estimate": 5}),
//!     json!({"title": "b", "estimate": 3}),
//!     json!({"title": "c", "estimate": 8}),
//! ];
//! let request = PlanRequest::new("estimate").with_workers(1);
//! let report = Planner::default().plan(&records, &request);
//! assert_eq!(report.total_duration, 16.0);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::analytics::{
    calculate_developer_workload, calculate_outliers, calculate_total_duration,
    filter_scheduled_tasks, find_critical_path_tasks_with_tolerance, ViewMode,
};
use crate::config::PlannerConfig;
use crate::dispatching::Strategy;
use crate::error::Result;
use crate::estimate::calculate_estimate;
use crate::fields::{extract_values, numeric_fields_sampled, ExtractOptions};
use crate::models::{HolidaySet, ScheduledTask, TimeUnit, WorkCalendar, WorkerLoad};
use crate::scheduler::{GreedyScheduler, ScheduleKpi};
use crate::validation::{validate_request, ValidationError};

/// Planning parameters, as chosen in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRequest {
    /// Field holding the size estimate.
    pub field_name: String,
    /// Display name used for unit inference (defaults to `field_name`).
    pub field_label: Option<String>,
    /// Explicit unit, bypassing inference.
    pub unit: Option<TimeUnit>,
    /// Number of workers.
    pub num_workers: usize,
    /// Schedule start (epoch ms).
    pub base_time_ms: i64,
    /// Weekdays nobody works.
    pub holidays: HolidaySet,
    /// Offset of local time east of UTC (minutes).
    pub utc_offset_minutes: i32,
    /// Processing-order strategy.
    pub strategy: Strategy,
    /// Visible slice of the schedule.
    pub view_mode: ViewMode,
    /// Outlier threshold as entered.
    pub outlier_threshold: String,
    /// Skip zero and negative estimates.
    pub require_positive: bool,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            field_label: None,
            unit: None,
            num_workers: 1,
            base_time_ms: 0,
            holidays: HolidaySet::new(),
            utc_offset_minutes: 0,
            strategy: Strategy::default(),
            view_mode: ViewMode::default(),
            outlier_threshold: String::new(),
            require_positive: true,
        }
    }
}

impl PlanRequest {
    /// Creates a request for the given estimate field.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Default::default()
        }
    }

    /// Parses a JSON request.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Sets the display name used for unit inference.
    pub fn with_field_label(mut self, label: impl Into<String>) -> Self {
        self.field_label = Some(label.into());
        self
    }

    /// Forces a unit.
    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Sets the worker count.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Sets the schedule start.
    pub fn with_base_time(mut self, base_time_ms: i64) -> Self {
        self.base_time_ms = base_time_ms;
        self
    }

    /// Sets the holiday weekdays.
    pub fn with_holidays(mut self, holidays: HolidaySet) -> Self {
        self.holidays = holidays;
        self
    }

    /// Sets the local UTC offset.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the view mode.
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// Sets the outlier threshold text.
    pub fn with_outlier_threshold(mut self, threshold: impl Into<String>) -> Self {
        self.outlier_threshold = threshold.into();
        self
    }

    /// Keeps zero and negative estimates when `false`.
    pub fn with_require_positive(mut self, require_positive: bool) -> Self {
        self.require_positive = require_positive;
        self
    }

    /// Unit of the estimate field: explicit, else inferred from its name.
    pub fn resolved_unit(&self) -> TimeUnit {
        self.unit.unwrap_or_else(|| {
            TimeUnit::from_field_name(self.field_label.as_deref().unwrap_or(&self.field_name))
        })
    }

    /// Holiday calendar in the request's local offset.
    pub fn calendar(&self) -> Result<WorkCalendar> {
        WorkCalendar::new(self.holidays).with_utc_offset_minutes(self.utc_offset_minutes)
    }
}

/// Everything the presentation layer needs for one set of parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport<'a> {
    /// Unit of estimates and of `total_duration`.
    pub unit: TimeUnit,
    /// Full schedule in processing order.
    pub tasks: Vec<ScheduledTask<'a>>,
    /// Tasks above the outlier threshold.
    pub outliers: Vec<ScheduledTask<'a>>,
    /// Per-worker load.
    pub workload: BTreeMap<usize, WorkerLoad>,
    /// Indices into `tasks` that define the makespan.
    pub critical_path: BTreeSet<usize>,
    /// Tasks shown for the requested view.
    pub visible: Vec<ScheduledTask<'a>>,
    /// Makespan in `unit`.
    pub total_duration: f64,
    /// Quality indicators.
    pub kpi: ScheduleKpi,
    /// Quick calendar-free estimate.
    pub estimate: Option<f64>,
    /// Problems found in the request; the report is still computed.
    pub issues: Vec<ValidationError>,
}

/// Runs the planning pipeline with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Candidate fields that hold numbers, sorted by name.
    pub fn numeric_fields<I>(&self, records: &[Value], candidates: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        numeric_fields_sampled(records, candidates, self.config.field_sample_size)
    }

    /// Plans `records` for `request`.
    pub fn plan<'a>(&self, records: &'a [Value], request: &PlanRequest) -> PlanReport<'a> {
        let issues = match validate_request(request) {
            Ok(()) => Vec::new(),
            Err(errors) => {
                for e in &errors {
                    warn!(kind = ?e.kind, "{}", e.message);
                }
                errors
            }
        };

        let calendar = request
            .calendar()
            .unwrap_or_else(|_| WorkCalendar::new(request.holidays));
        let unit = request.resolved_unit();

        let options = ExtractOptions {
            require_positive: request.require_positive,
        };
        let items = extract_values(&request.field_name, records, options);

        let tasks = GreedyScheduler::new(request.num_workers)
            .with_strategy(request.strategy)
            .with_unit(unit)
            .with_calendar(calendar.clone())
            .schedule(&items, request.base_time_ms);

        let outliers = calculate_outliers(&tasks, &request.outlier_threshold);
        let workload = calculate_developer_workload(&tasks);
        let critical_path = find_critical_path_tasks_with_tolerance(
            &tasks,
            request.num_workers,
            self.config.critical_path_tolerance_ms,
        );
        let visible = filter_scheduled_tasks(&tasks, request.view_mode, &outliers, &critical_path);
        let total_duration = calculate_total_duration(&tasks, unit);
        let kpi = ScheduleKpi::calculate(&tasks, request.num_workers, &calendar);
        let estimate = calculate_estimate(&items, records.len(), request.num_workers);

        debug!(
            field = %request.field_name,
            unit = %unit,
            tasks = tasks.len(),
            visible = visible.len(),
            total_duration,
            "plan computed"
        );

        PlanReport {
            unit,
            tasks,
            outliers,
            workload,
            critical_path,
            visible,
            total_duration,
            kpi,
            estimate,
            issues,
        }
    }
}
