//! Read-models derived from a schedule.
//!
//! Every function here is a pure fold over the scheduler's output and is
//! recomputed from scratch on each call.
//!
//! - **outliers**: tasks whose estimate exceeds a user threshold
//! - **workload**: per-worker totals, counts, and latest finish
//! - **critical path**: tasks finishing within a tolerance of the makespan
//! - **view**: view-mode filtering and makespan in the caller's unit

mod critical_path;
mod outliers;
mod view;
mod workload;

pub use critical_path::{
    find_critical_path_tasks, find_critical_path_tasks_with_tolerance, CRITICAL_PATH_TOLERANCE_MS,
};
pub use outliers::{calculate_outliers, parse_threshold};
pub use view::{calculate_total_duration, filter_scheduled_tasks, ViewMode};
pub use workload::calculate_developer_workload;
