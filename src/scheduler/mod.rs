//! Greedy list scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` orders valued work items by a [`Strategy`] and hands
//! each to the currently least-loaded worker (Graham's list scheduling).
//! With the largest-first strategy this is the LPT heuristic. It is a
//! single greedy pass, not an optimal bin-packer.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, total work, per-worker utilization,
//! and parallelism.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//!
//! [`Strategy`]: crate::dispatching::Strategy

mod greedy;
mod kpi;

pub use greedy::{schedule_tasks, GreedyScheduler};
pub use kpi::ScheduleKpi;
