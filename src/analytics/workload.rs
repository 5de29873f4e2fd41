//! Per-worker workload aggregation.

use std::collections::BTreeMap;

use crate::models::{ScheduledTask, WorkerLoad};

/// Per-worker totals, task counts, and latest finish instants.
///
/// Only workers with at least one task appear in the map.
pub fn calculate_developer_workload(tasks: &[ScheduledTask<'_>]) -> BTreeMap<usize, WorkerLoad> {
    tasks.iter().fold(BTreeMap::new(), |mut acc, t| {
        let load = acc.entry(t.worker_index).or_insert(WorkerLoad {
            total: 0.0,
            tasks: 0,
            max_end_time: t.end_time,
        });
        load.total += t.duration;
        load.tasks += 1;
        load.max_end_time = load.max_end_time.max(t.end_time);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workload_fold() {
        let r = json!({});
        let tasks = vec![
            ScheduledTask::new(&r, 0, 0, 800, 8.0),
            ScheduledTask::new(&r, 1, 0, 500, 5.0),
            ScheduledTask::new(&r, 1, 500, 800, 3.0),
        ];
        let wl = calculate_developer_workload(&tasks);
        assert_eq!(wl.len(), 2);
        assert_eq!(wl[&0].tasks, 1);
        assert!((wl[&0].total - 8.0).abs() < 1e-10);
        assert_eq!(wl[&1].tasks, 2);
        assert!((wl[&1].total - 8.0).abs() < 1e-10);
        assert_eq!(wl[&1].max_end_time, 800);
    }

    #[test]
    fn test_workload_empty() {
        assert!(calculate_developer_workload(&[]).is_empty());
    }
}
