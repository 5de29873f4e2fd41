//! Timeline planning engine for issue-tracker analytics.
//!
//! Turns a list of opaque work-item records, each carrying a numeric size
//! estimate, into a deterministic multi-worker schedule (a Gantt
//! assignment), then derives makespan, per-worker workload, outliers, and
//! the critical path from it. A weekly holiday calendar removes whole
//! weekdays from every worker's available time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: records and field lookup, `ValuedItem`,
//!   `ScheduledTask`, `WorkerLoad`, `TimeUnit`, `HolidaySet`, `WorkCalendar`
//! - **`fields`**: Numeric field detection and value extraction
//! - **`dispatching`**: Processing-order strategies (LPT, SPT, input order)
//! - **`scheduler`**: Greedy list scheduler and schedule KPIs
//! - **`analytics`**: Outliers, workload, critical path, view filtering
//! - **`estimate`**: Calendar-free aggregate estimate
//! - **`planner`**: End-to-end pipeline over one set of UI parameters
//! - **`validation`**: Request checks (zero workers, empty field, ...)
//!
//! # Architecture
//!
//! Everything is synchronous and pure: no I/O, no shared state, no
//! caching. Each call recomputes from its inputs, and identical inputs
//! always produce identical outputs.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod analytics;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod estimate;
pub mod fields;
pub mod models;
pub mod planner;
pub mod scheduler;
pub mod validation;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use planner::{PlanReport, PlanRequest, Planner};
