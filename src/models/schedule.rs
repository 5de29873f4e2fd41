//! Schedule (solution) model.
//!
//! A schedule is the ordered list of work items placed on workers and
//! absolute time intervals by one scheduling pass.

use serde::Serialize;
use serde_json::Value;

use super::record::{record_identifier, record_label};

/// A work item assigned to a worker and a time interval.
///
/// `start_time` and `end_time` are epoch milliseconds; `duration` is the
/// original estimate in the caller's unit, not milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask<'a> {
    /// The original record.
    pub item: &'a Value,
    /// Worker index in `[0, num_workers)`.
    pub worker_index: usize,
    /// Start instant (epoch ms).
    pub start_time: i64,
    /// Finish instant (epoch ms), never before `start_time`.
    pub end_time: i64,
    /// Size estimate in the caller's unit.
    pub duration: f64,
    /// Display label.
    pub label: String,
    /// Display identifier.
    pub identifier: String,
}

impl<'a> ScheduledTask<'a> {
    /// Creates a scheduled task, deriving identity from the record.
    pub fn new(
        item: &'a Value,
        worker_index: usize,
        start_time: i64,
        end_time: i64,
        duration: f64,
    ) -> Self {
        Self {
            item,
            worker_index,
            start_time,
            end_time,
            duration,
            label: record_label(item),
            identifier: record_identifier(item),
        }
    }

    /// Wall-clock span of this task (ms), including skipped holidays.
    #[inline]
    pub fn span_ms(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Aggregated load of one worker.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerLoad {
    /// Sum of task durations (caller's unit).
    pub total: f64,
    /// Number of tasks.
    pub tasks: usize,
    /// Latest finish instant among the worker's tasks (epoch ms).
    pub max_end_time: i64,
}
