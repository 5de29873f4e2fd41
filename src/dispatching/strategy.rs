//! User-facing scheduling strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rules::{Fifo, Lpt, Spt};
use super::{sort_indices, DispatchingRule};
use crate::error::PlannerError;
use crate::models::ValuedItem;

/// Processing order for list scheduling.
///
/// `RoundRobin` only preserves the input order; workers are still chosen
/// by least load, exactly as for the other strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Descending by value (LPT).
    #[default]
    LargestFirst,
    /// Ascending by value (SPT).
    SmallestFirst,
    /// Input order.
    RoundRobin,
}

impl Strategy {
    /// The dispatching rule backing this strategy.
    pub fn rule(self) -> &'static dyn DispatchingRule {
        match self {
            Strategy::LargestFirst => &Lpt,
            Strategy::SmallestFirst => &Spt,
            Strategy::RoundRobin => &Fifo,
        }
    }

    /// Processing order as indices into `items`.
    pub fn sort_indices(self, items: &[ValuedItem<'_>]) -> Vec<usize> {
        sort_indices(self.rule(), items)
    }

    /// Kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::LargestFirst => "largest-first",
            Strategy::SmallestFirst => "smallest-first",
            Strategy::RoundRobin => "round-robin",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "largest-first" => Ok(Strategy::LargestFirst),
            "smallest-first" => Ok(Strategy::SmallestFirst),
            "round-robin" => Ok(Strategy::RoundRobin),
            other => Err(PlannerError::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_roundtrip_names() {
        for s in [
            Strategy::LargestFirst,
            Strategy::SmallestFirst,
            Strategy::RoundRobin,
        ] {
            assert_eq!(s.as_str().parse::<Strategy>().unwrap(), s);
        }
        assert!(matches!(
            "random".parse::<Strategy>(),
            Err(PlannerError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_serde_kebab_case() {
        let s: Strategy = serde_json::from_str("\"smallest-first\"").unwrap();
        assert_eq!(s, Strategy::SmallestFirst);
        assert_eq!(
            serde_json::to_string(&Strategy::RoundRobin).unwrap(),
            "\"round-robin\""
        );
    }

    #[test]
    fn test_round_robin_identity() {
        let a = json!({});
        let items = [
            ValuedItem::new(&a, 1.0),
            ValuedItem::new(&a, 9.0),
            ValuedItem::new(&a, 4.0),
        ];
        assert_eq!(Strategy::RoundRobin.sort_indices(&items), vec![0, 1, 2]);
        assert_eq!(Strategy::LargestFirst.sort_indices(&items), vec![1, 2, 0]);
        assert_eq!(Strategy::SmallestFirst.sort_indices(&items), vec![0, 2, 1]);
        assert_eq!(Strategy::RoundRobin.rule().name(), "FIFO");
    }
}
