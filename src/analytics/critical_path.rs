//! Critical-path detection for independent task schedules.
//!
//! With no precedence between tasks, the critical path is simply the set of
//! tasks whose finish defines the makespan, within a tolerance band.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::models::ScheduledTask;

/// Default slack (ms) within which a finish counts as defining the makespan.
pub const CRITICAL_PATH_TOLERANCE_MS: i64 = 1000;

/// Indices of tasks that finish within [`CRITICAL_PATH_TOLERANCE_MS`] of
/// the latest finish.
pub fn find_critical_path_tasks(tasks: &[ScheduledTask<'_>], num_workers: usize) -> BTreeSet<usize> {
    find_critical_path_tasks_with_tolerance(tasks, num_workers, CRITICAL_PATH_TOLERANCE_MS)
}

/// Critical-path detection with an explicit tolerance.
///
/// The latest finish is taken per worker first, then across workers.
/// Workers outside `[0, num_workers)` still contribute.
pub fn find_critical_path_tasks_with_tolerance(
    tasks: &[ScheduledTask<'_>],
    num_workers: usize,
    tolerance_ms: i64,
) -> BTreeSet<usize> {
    let worker_end: BTreeMap<usize, i64> = tasks.iter().fold(BTreeMap::new(), |mut acc, t| {
        let end = acc.entry(t.worker_index).or_insert(t.end_time);
        *end = (*end).max(t.end_time);
        acc
    });
    let Some(max_time) = worker_end.into_values().max() else {
        return BTreeSet::new();
    };

    let cutoff = max_time.saturating_sub(tolerance_ms);
    let critical: BTreeSet<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.end_time >= cutoff)
        .map(|(i, _)| i)
        .collect();

    trace!(max_time, num_workers, critical = critical.len(), "critical path computed");
    critical
}
