//! View filtering and total schedule duration.
//!
//! Selects which tasks a presentation shows and reports the makespan in
//! the schedule's unit.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::{convert_from_ms, ScheduledTask, TimeUnit};

/// Which slice of the schedule a presentation shows.
///
/// `All` and `WorkloadBalance` show the same data; they differ only in
/// how the rendering layer annotates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    All,
    OutliersOnly,
    CriticalPath,
    WorkloadBalance,
}

impl ViewMode {
    /// Kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::All => "all",
            ViewMode::OutliersOnly => "outliers-only",
            ViewMode::CriticalPath => "critical-path",
            ViewMode::WorkloadBalance => "workload-balance",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(ViewMode::All),
            "outliers-only" => Ok(ViewMode::OutliersOnly),
            "critical-path" => Ok(ViewMode::CriticalPath),
            "workload-balance" => Ok(ViewMode::WorkloadBalance),
            other => Err(PlannerError::UnknownViewMode(other.to_string())),
        }
    }
}

/// Selects the tasks shown for `view_mode`.
///
/// `outliers` is returned as-is for the outliers view; `critical` holds
/// indices into `tasks`.
pub fn filter_scheduled_tasks<'a>(
    tasks: &[ScheduledTask<'a>],
    view_mode: ViewMode,
    outliers: &[ScheduledTask<'a>],
    critical: &BTreeSet<usize>,
) -> Vec<ScheduledTask<'a>> {
    match view_mode {
        ViewMode::OutliersOnly => outliers.to_vec(),
        ViewMode::CriticalPath => tasks
            .iter()
            .enumerate()
            .filter(|(i, _)| critical.contains(i))
            .map(|(_, t)| t.clone())
            .collect(),
        ViewMode::All | ViewMode::WorkloadBalance => tasks.to_vec(),
    }
}

/// Makespan of the schedule in `unit`.
///
/// This is the wall-clock span from earliest start to latest finish, not
/// the sum of estimates. Empty schedules span 0.
pub fn calculate_total_duration(tasks: &[ScheduledTask<'_>], unit: TimeUnit) -> f64 {
    let start = tasks.iter().map(|t| t.start_time).min();
    let end = tasks.iter().map(|t| t.end_time).max();
    match start.zip(end) {
        Some((start, end)) => convert_from_ms((end - start) as f64, unit),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HOUR: i64 = 3_600_000;

    #[test]
    fn test_view_mode_names() {
        for m in [
            ViewMode::All,
            ViewMode::OutliersOnly,
            ViewMode::CriticalPath,
            ViewMode::WorkloadBalance,
        ] {
            assert_eq!(m.as_str().parse::<ViewMode>().unwrap(), m);
        }
        assert!("gantt".parse::<ViewMode>().is_err());
        let m: ViewMode = serde_json::from_str("\"critical-path\"").unwrap();
        assert_eq!(m, ViewMode::CriticalPath);
    }

    #[test]
    fn test_filter_modes() {
        let r = json!({});
        let tasks = vec![
            ScheduledTask::new(&r, 0, 0, 8 * HOUR, 8.0),
            ScheduledTask::new(&r, 1, 0, 5 * HOUR, 5.0),
            ScheduledTask::new(&r, 1, 5 * HOUR, 8 * HOUR, 3.0),
        ];
        let outliers = vec![tasks[0].clone()];
        let critical: BTreeSet<usize> = [0, 2].into_iter().collect();

        assert_eq!(filter_scheduled_tasks(&tasks, ViewMode::All, &outliers, &critical), tasks);
        assert_eq!(
            filter_scheduled_tasks(&tasks, ViewMode::WorkloadBalance, &outliers, &critical),
            tasks
        );
        assert_eq!(
            filter_scheduled_tasks(&tasks, ViewMode::OutliersOnly, &outliers, &critical),
            outliers
        );
        let cp = filter_scheduled_tasks(&tasks, ViewMode::CriticalPath, &outliers, &critical);
        let durations: Vec<f64> = cp.iter().map(|t| t.duration).collect();
        assert_eq!(durations, vec![8.0, 3.0]);
    }

    #[test]
    fn test_total_duration_is_makespan() {
        let r = json!({});
        let tasks = vec![
            ScheduledTask::new(&r, 0, 0, 8 * HOUR, 8.0),
            ScheduledTask::new(&r, 1, 0, 5 * HOUR, 5.0),
            ScheduledTask::new(&r, 1, 5 * HOUR, 8 * HOUR, 3.0),
        ];
        assert_eq!(calculate_total_duration(&tasks, TimeUnit::Hours), 8.0);
        assert_eq!(calculate_total_duration(&tasks, TimeUnit::Units), 8.0);
        assert_eq!(calculate_total_duration(&[], TimeUnit::Days), 0.0);
    }
}
