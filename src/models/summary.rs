//! Group summary (report) model.
//!
//! Derived from one chosen candidate: total weight and member labels per
//! group. Stored densely (index `group_id - 1`) and exposed as ordered
//! maps for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total weight | Sum of all group weights (equals the sum of entity weights) |
//! | Std. dev. | Population standard deviation of group weights (the score) |
//! | Imbalance | Heaviest group weight minus lightest group weight |

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::GroupId;
use crate::stats;

/// Per-group totals and memberships for one candidate.
///
/// Only built by [`BalanceProblem::summarize`](crate::sampling::BalanceProblem::summarize),
/// so `sizes` and `members` always have one entry per group.
///
/// ```compile_fail
/// let s: u_balance::models::GroupSummary =
///     serde_json::from_str(r#"{"sizes":[1.0],"members":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    sizes: Vec<f64>,
    members: Vec<Vec<String>>,
}

impl GroupSummary {
    pub(crate) fn new(sizes: Vec<f64>, members: Vec<Vec<String>>) -> Self {
        debug_assert_eq!(sizes.len(), members.len());
        Self { sizes, members }
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.sizes.len()
    }

    /// Group weights, index `g - 1` for group `g`.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Member labels, index `g - 1` for group `g`.
    pub fn members(&self) -> &[Vec<String>] {
        &self.members
    }

    /// Total weight of `group`, or `None` if the id is out of range.
    pub fn size_of(&self, group: GroupId) -> Option<f64> {
        group.checked_sub(1).and_then(|i| self.sizes.get(i)).copied()
    }

    /// Member labels of `group` in entity order, or `None` if out of range.
    pub fn members_of(&self, group: GroupId) -> Option<&[String]> {
        group
            .checked_sub(1)
            .and_then(|i| self.members.get(i))
            .map(Vec::as_slice)
    }

    /// Mapping view: group id → total weight.
    pub fn group_sizes(&self) -> BTreeMap<GroupId, f64> {
        self.sizes
            .iter()
            .enumerate()
            .map(|(i, &w)| (i + 1, w))
            .collect()
    }

    /// Mapping view: group id → member labels.
    pub fn group_members(&self) -> BTreeMap<GroupId, Vec<String>> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, m)| (i + 1, m.clone()))
            .collect()
    }

    /// Total number of member labels across all groups.
    pub fn member_count(&self) -> usize {
        self.members.iter().map(Vec::len).sum()
    }

    /// Sum of all group weights.
    pub fn total_weight(&self) -> f64 {
        self.sizes.iter().sum()
    }

    /// Mean group weight.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.sizes)
    }

    /// Population standard deviation of group weights.
    pub fn std_dev(&self) -> f64 {
        stats::population_std_dev(&self.sizes)
    }

    /// Heaviest minus lightest group weight.
    pub fn imbalance(&self) -> f64 {
        stats::range(&self.sizes)
    }
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (size, members)) in self.sizes.iter().zip(&self.members).enumerate() {
            writeln!(f, "group {}: {} [{}]", i + 1, size, members.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GroupSummary {
        GroupSummary::new(
            vec![20.0, 25.0, 15.0],
            vec![
                vec!["a".into(), "c".into()],
                vec!["b".into()],
                vec!["d".into(), "e".into()],
            ],
        )
    }

    #[test]
    fn test_lookup_is_one_based() {
        let s = sample();
        assert_eq!(s.size_of(1), Some(20.0));
        assert_eq!(s.size_of(3), Some(15.0));
        assert_eq!(s.size_of(0), None);
        assert_eq!(s.size_of(4), None);
        assert_eq!(s.members_of(1), Some(&["a".to_string(), "c".to_string()][..]));
        assert_eq!(s.members_of(0), None);
    }

    #[test]
    fn test_mapping_views() {
        let s = sample();
        let sizes = s.group_sizes();
        assert_eq!(sizes.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(sizes[&2], 25.0);
        assert_eq!(s.group_members()[&3], vec!["d".to_string(), "e".to_string()]);
    }

    #[test]
    fn test_metrics() {
        let s = sample();
        assert_eq!(s.group_count(), 3);
        assert_eq!(s.member_count(), 5);
        assert_eq!(s.total_weight(), 60.0);
        assert_eq!(s.mean(), 20.0);
        assert_eq!(s.imbalance(), 10.0);
        // deviations: 0, 5, -5 -> variance 50/3
        assert!((s.std_dev() - (50.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().next(), Some("group 1: 20 [a, c]"));
    }
}
