//! Group summaries for a chosen candidate.

use super::{scorer, BalanceProblem};
use crate::models::{Candidate, GroupSummary};

/// Builds the group weights and member lists of `candidate`.
///
/// Weights are recomputed with the scorer so they always agree with the
/// score. Members keep entity order within each group.
///
/// # Panics
/// If the candidate does not fit the problem (length or gene range).
pub fn summarize(problem: &BalanceProblem, candidate: &Candidate) -> GroupSummary {
    let sizes = scorer::group_sums(problem, candidate);
    let members = (1..=problem.group_count())
        .map(|g| {
            candidate
                .entities_in(g)
                .map(|i| problem.labels()[i].clone())
                .collect()
        })
        .collect();
    GroupSummary::new(sizes, members)
}
