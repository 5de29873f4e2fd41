//! Greedy multi-worker list scheduler.
//!
//! # Algorithm
//!
//! 1. Order items by the strategy's dispatching rule (stable).
//! 2. For each item, pick the worker with the smallest availability
//!    offset; ties go to the lowest worker index.
//! 3. Convert the item's value to milliseconds in the resolved unit.
//! 4. Start at `base + offset`, finish via the holiday calendar.
//! 5. Advance the worker's offset to the finish instant.
//!
//! Tasks are independent: there are no precedence constraints, and the
//! pass is never revisited.
//!
//! # Complexity
//! O(n log n + n * m) where n = items, m = workers.
//!
//! # Reference
//! Graham (1966), "Bounds for Certain Multiprocessing Anomalies"

use tracing::{debug, trace};

use crate::dispatching::Strategy;
use crate::models::{convert_to_ms, HolidaySet, ScheduledTask, TimeUnit, ValuedItem, WorkCalendar};

/// Greedy list scheduler over identical workers.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use u_timeline::dispatching::Strategy;
/// use u_timeline::models::{TimeUnit, ValuedItem};
/// use u_timeline::scheduler::GreedyScheduler;
///
/// let records = [json!({"title": "a"}), json!({"title": "b"})];
/// let items: Vec<_> = records.iter().map(|r| ValuedItem::new(r, 2.0)).collect();
///
/// let scheduler = GreedyScheduler::new(2)
///     .with_strategy(Strategy::LargestFirst)
///     .with_unit(TimeUnit::Hours);
/// let tasks = scheduler.schedule(&items, 0);
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks[1].worker_index, 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    num_workers: usize,
    strategy: Strategy,
    unit: TimeUnit,
    calendar: WorkCalendar,
}

impl GreedyScheduler {
    /// Creates a scheduler for `num_workers` workers.
    ///
    /// Defaults: largest-first, generic units, no holidays (UTC).
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            strategy: Strategy::default(),
            unit: TimeUnit::default(),
            calendar: WorkCalendar::default(),
        }
    }

    /// Sets the processing-order strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the unit item values are expressed in.
    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the holiday calendar.
    pub fn with_calendar(mut self, calendar: WorkCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Processing-order strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Unit of item values.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Holiday calendar.
    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    /// Schedules items starting at `base_time_ms`.
    ///
    /// Returns tasks in processing order. Empty input or zero workers
    /// yields an empty schedule.
    pub fn schedule<'a>(&self, items: &[ValuedItem<'a>], base_time_ms: i64) -> Vec<ScheduledTask<'a>> {
        if items.is_empty() || self.num_workers < 1 {
            return Vec::new();
        }

        let order = self.strategy.sort_indices(items);
        // Workers beyond the item count are never chosen.
        let mut available = vec![0_i64; self.num_workers.min(items.len())];
        let mut scheduled = Vec::with_capacity(items.len());

        for idx in order {
            let item = &items[idx];
            let worker = least_loaded(&available);

            let duration_ms = convert_to_ms(item.value, self.unit).round() as i64;
            let start = base_time_ms.saturating_add(available[worker]);
            let end = self.calendar.end_time(start, duration_ms);

            trace!(
                item = idx,
                worker,
                start,
                end,
                value = item.value,
                "assigned task"
            );

            scheduled.push(ScheduledTask::new(item.item, worker, start, end, item.value));
            available[worker] = end - base_time_ms;
        }

        debug!(
            tasks = scheduled.len(),
            workers = self.num_workers,
            strategy = %self.strategy,
            unit = %self.unit,
            "scheduling pass complete"
        );
        scheduled
    }
}

/// Index of the smallest offset; earlier index wins ties.
fn least_loaded(available: &[i64]) -> usize {
    let mut best = 0;
    for (w, &offset) in available.iter().enumerate().skip(1) {
        if offset < available[best] {
            best = w;
        }
    }
    best
}

/// Schedules items on `num_workers` workers with a UTC holiday calendar.
pub fn schedule_tasks<'a>(
    items: &[ValuedItem<'a>],
    num_workers: usize,
    unit: TimeUnit,
    strategy: Strategy,
    base_time_ms: i64,
    holidays: &HolidaySet,
) -> Vec<ScheduledTask<'a>> {
    GreedyScheduler::new(num_workers)
        .with_strategy(strategy)
        .with_unit(unit)
        .with_calendar(WorkCalendar::new(*holidays))
        .schedule(items, base_time_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const HOUR: i64 = 3_600_000;
    const DAY: i64 = 24 * HOUR;
    // Monday 2024-01-01 00:00:00 UTC
    const MONDAY: i64 = 1_704_067_200_000;

    fn records(values: &[f64]) -> Vec<Value> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| json!({"title": format!("T{i}"), "number": i, "estimate": v}))
            .collect()
    }

    fn valued(recs: &[Value]) -> Vec<ValuedItem<'_>> {
        recs.iter()
            .map(|r| ValuedItem::new(r, r["estimate"].as_f64().unwrap()))
            .collect()
    }

    #[test]
    fn test_single_worker_back_to_back() {
        let recs = records(&[5.0, 3.0, 8.0]);
        let items = valued(&recs);
        let tasks = schedule_tasks(
            &items,
            1,
            TimeUnit::Hours,
            Strategy::LargestFirst,
            MONDAY,
            &HolidaySet::new(),
        );

        let durations: Vec<f64> = tasks.iter().map(|t| t.duration).collect();
        assert_eq!(durations, vec![8.0, 5.0, 3.0]);
        assert_eq!(tasks[0].start_time, MONDAY);
        assert_eq!(tasks[0].end_time, MONDAY + 8 * HOUR);
        assert_eq!(tasks[1].start_time, tasks[0].end_time);
        assert_eq!(tasks[2].start_time, tasks[1].end_time);
        assert_eq!(tasks[2].end_time, MONDAY + 16 * HOUR);
        assert_eq!(tasks[0].label, "T2");
    }

    #[test]
    fn test_two_workers_least_loaded() {
        let recs = records(&[5.0, 3.0, 8.0]);
        let items = valued(&recs);
        let tasks = GreedyScheduler::new(2)
            .with_unit(TimeUnit::Hours)
            .schedule(&items, 0);

        // 8 → w0, 5 → w1, 3 → w1 (free at 5h, before w0 at 8h)
        assert_eq!(tasks[0].worker_index, 0);
        assert_eq!(tasks[1].worker_index, 1);
        assert_eq!(tasks[2].worker_index, 1);
        assert_eq!(tasks[2].start_time, 5 * HOUR);
        assert_eq!(tasks[2].end_time, 8 * HOUR);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let recs = records(&[1.0, 1.0, 1.0, 1.0]);
        let items = valued(&recs);
        let tasks = GreedyScheduler::new(3).schedule(&items, 0);
        let workers: Vec<usize> = tasks.iter().map(|t| t.worker_index).collect();
        assert_eq!(workers, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_smallest_first_order() {
        let recs = records(&[5.0, 3.0, 8.0]);
        let items = valued(&recs);
        let tasks = GreedyScheduler::new(1)
            .with_strategy(Strategy::SmallestFirst)
            .schedule(&items, 0);
        let durations: Vec<f64> = tasks.iter().map(|t| t.duration).collect();
        assert_eq!(durations, vec![3.0, 5.0, 8.0]);
    }

    #[test]
    fn test_round_robin_keeps_input_order() {
        let recs = records(&[5.0, 3.0, 8.0]);
        let items = valued(&recs);
        let tasks = GreedyScheduler::new(2)
            .with_strategy(Strategy::RoundRobin)
            .schedule(&items, 0);
        let durations: Vec<f64> = tasks.iter().map(|t| t.duration).collect();
        assert_eq!(durations, vec![5.0, 3.0, 8.0]);
        // Least-loaded assignment, not cyclic: 8 goes to w1 (free at 3h).
        assert_eq!(tasks[2].worker_index, 1);
        assert_eq!(tasks[2].start_time, 3 * HOUR);
    }

    #[test]
    fn test_calendar_applied() {
        let recs = records(&[1.0]);
        let items = valued(&recs);
        let friday_noon = MONDAY + 4 * DAY + 12 * HOUR;
        let tasks = schedule_tasks(
            &items,
            1,
            TimeUnit::Days,
            Strategy::LargestFirst,
            friday_noon,
            &HolidaySet::weekends(),
        );
        assert_eq!(tasks[0].end_time, MONDAY + 7 * DAY + 12 * HOUR);
    }

    #[test]
    fn test_worker_offset_includes_skipped_holidays() {
        let recs = records(&[1.0, 1.0]);
        let items = valued(&recs);
        let friday = MONDAY + 4 * DAY;
        let tasks = schedule_tasks(
            &items,
            1,
            TimeUnit::Days,
            Strategy::RoundRobin,
            friday,
            &HolidaySet::weekends(),
        );
        // Friday done → next task starts at Saturday midnight and runs Monday.
        assert_eq!(tasks[1].start_time, friday + DAY);
        assert_eq!(tasks[1].end_time, MONDAY + 8 * DAY);
    }

    #[test]
    fn test_empty_input() {
        let tasks = schedule_tasks(
            &[],
            3,
            TimeUnit::Hours,
            Strategy::LargestFirst,
            0,
            &HolidaySet::new(),
        );
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_zero_workers() {
        let recs = records(&[1.0]);
        let items = valued(&recs);
        assert!(GreedyScheduler::new(0).schedule(&items, 0).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let recs = records(&[2.0, 7.0, 2.0, 4.0, 7.0, 1.0]);
        let items = valued(&recs);
        let s = GreedyScheduler::new(3).with_calendar(WorkCalendar::new(HolidaySet::weekends()));
        assert_eq!(s.schedule(&items, MONDAY), s.schedule(&items, MONDAY));
    }

    #[test]
    fn test_huge_worker_count() {
        let recs = records(&[2.0, 1.0]);
        let items = valued(&recs);
        let tasks = GreedyScheduler::new(usize::MAX).schedule(&items, 0);
        let workers: Vec<usize> = tasks.iter().map(|t| t.worker_index).collect();
        assert_eq!(workers, vec![0, 1]);
        assert!(GreedyScheduler::new(usize::MAX).schedule(&[], 0).is_empty());
    }
}
