//! Schedule quality metrics (KPIs).
//!
//! Computes summary indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish - earliest start (ms) |
//! | Total Work | Sum of task estimates (caller's unit) |
//! | Utilization | Busy working time / working time in the makespan window |
//! | Parallelism | Total busy working time / working time in the makespan window |
//!
//! Working time excludes holidays, so a worker busy on every working day
//! of the window reaches a utilization of 1.0.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ScheduledTask, WorkCalendar};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    /// Wall-clock span from earliest start to latest finish (ms).
    pub makespan_ms: i64,
    /// Sum of task estimates in the caller's unit.
    pub total_work: f64,
    /// Per-worker utilization (0.0..1.0) for workers holding tasks.
    pub utilization_by_worker: BTreeMap<usize, f64>,
    /// Mean utilization over all `num_workers`; idle workers count as 0.
    pub avg_utilization: f64,
    /// Average number of workers busy during the makespan window.
    pub parallelism: f64,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule produced over `num_workers` workers.
    pub fn calculate(tasks: &[ScheduledTask<'_>], num_workers: usize, calendar: &WorkCalendar) -> Self {
        let total_work: f64 = tasks.iter().map(|t| t.duration).sum();

        let mut busy_by_worker: BTreeMap<usize, i64> = BTreeMap::new();
        for t in tasks {
            *busy_by_worker.entry(t.worker_index).or_insert(0) +=
                calendar.working_time_between(t.start_time, t.end_time);
        }

        let window = tasks
            .iter()
            .map(|t| t.start_time)
            .min()
            .zip(tasks.iter().map(|t| t.end_time).max());

        let (makespan_ms, horizon) = match window {
            Some((start, end)) => (end - start, calendar.working_time_between(start, end)),
            None => (0, 0),
        };

        let utilization_by_worker: BTreeMap<usize, f64> = busy_by_worker
            .iter()
            .map(|(&w, &busy)| (w, ratio(busy, horizon)))
            .collect();

        let avg_utilization = if num_workers == 0 {
            0.0
        } else {
            utilization_by_worker.values().sum::<f64>() / num_workers as f64
        };

        let parallelism = ratio(busy_by_worker.values().sum(), horizon);

        Self {
            makespan_ms,
            total_work,
            utilization_by_worker,
            avg_utilization,
            parallelism,
        }
    }
}

fn ratio(busy: i64, horizon: i64) -> f64 {
    if horizon <= 0 {
        0.0
    } else {
        busy as f64 / horizon as f64
    }
}
