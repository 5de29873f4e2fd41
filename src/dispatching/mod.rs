//! Dispatching rules and processing-order strategies.
//!
//! A strategy fixes the order in which valued work items are handed to
//! the list scheduler. Each strategy is backed by a dispatching rule that
//! scores items; items are then stably sorted by score, so ties keep
//! their original relative order and results are reproducible.
//!
//! # Usage
//!
//! ```
//! use serde_json::json;
//! use u_timeline::dispatching::Strategy;
//! use u_timeline::models::ValuedItem;
//!
//! let a = json!({"title": "a"});
//! let b = json!({"title": "b"});
//! let items = [ValuedItem::new(&a, 2.0), ValuedItem::new(&b, 5.0)];
//! assert_eq!(Strategy::LargestFirst.sort_indices(&items), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;
mod strategy;

pub use strategy::Strategy;

use crate::models::ValuedItem;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (processed first).
pub type RuleScore = f64;

/// A dispatching rule that scores a valued work item.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "LPT").
    fn name(&self) -> &'static str;

    /// Scores an item given its position in the input list.
    fn evaluate(&self, item: &ValuedItem<'_>, position: usize) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns item indices ordered by ascending rule score.
///
/// The sort is stable: equal scores keep input order.
pub fn sort_indices(rule: &dyn DispatchingRule, items: &[ValuedItem<'_>]) -> Vec<usize> {
    let scores: Vec<RuleScore> = items
        .iter()
        .enumerate()
        .map(|(pos, item)| rule.evaluate(item, pos))
        .collect();

    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));
    indices
}
