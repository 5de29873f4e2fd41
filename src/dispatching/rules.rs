//! Built-in dispatching rules.
//!
//! All rules return lower scores for items that should be processed first.

use super::{DispatchingRule, RuleScore};
use crate::models::ValuedItem;

/// Longest Processing Time.
///
/// Larger estimates first. On identical parallel workers, LPT list
/// scheduling is within 4/3 - 1/(3m) of the optimal makespan.
///
/// # Reference
/// Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, item: &ValuedItem<'_>, _position: usize) -> RuleScore {
        -item.value
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

/// Shortest Processing Time.
///
/// Smaller estimates first. Minimizes mean completion time on a single
/// worker.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, item: &ValuedItem<'_>, _position: usize) -> RuleScore {
        item.value
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// First In First Out.
///
/// Keeps the input order.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _item: &ValuedItem<'_>, position: usize) -> RuleScore {
        position as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
