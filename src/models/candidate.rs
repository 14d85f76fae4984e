//! Candidate assignments (chromosomes).
//!
//! # Encoding
//!
//! A candidate is a vector of length N where position `i` holds the
//! 1-based group id assigned to entity `i`. Generated candidates carry
//! no validity guarantee: a candidate may leave some groups empty.

use std::collections::HashSet;

use serde::Serialize;

/// 1-based group identifier.
pub type GroupId = usize;

/// One complete assignment of every entity to a group.
///
/// Built by the generator or by
/// [`BalanceProblem::candidate`](crate::sampling::BalanceProblem::candidate),
/// which checks length and group range. Serialize-only, so no unchecked
/// candidate can enter through deserialization:
///
/// ```compile_fail
/// let c: u_balance::models::Candidate = serde_json::from_str(r#"{"genes":[0]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    genes: Vec<GroupId>,
}

impl Candidate {
    /// Wraps genes without range checks. Use
    /// [`BalanceProblem::candidate`](crate::sampling::BalanceProblem::candidate)
    /// for caller-supplied assignments.
    pub(crate) fn from_genes(genes: Vec<GroupId>) -> Self {
        Self { genes }
    }

    /// Group id per entity, index-aligned with the problem's entities.
    #[inline]
    pub fn genes(&self) -> &[GroupId] {
        &self.genes
    }

    /// Number of entities covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the candidate assigns no entities at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Group assigned to `entity`, if the index is in range.
    pub fn group_of(&self, entity: usize) -> Option<GroupId> {
        self.genes.get(entity).copied()
    }

    /// Number of distinct group ids used.
    pub fn distinct_groups(&self) -> usize {
        self.genes.iter().collect::<HashSet<_>>().len()
    }

    /// Entity indices assigned to `group`, in entity order.
    pub fn entities_in(&self, group: GroupId) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(move |&(_, &g)| g == group)
            .map(|(i, _)| i)
    }
}

/// A valid candidate paired with its score.
///
/// `index` is the candidate's position in the filtered batch; it breaks
/// ties so that the earliest candidate wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Position in the batch the score was computed from.
    pub index: usize,
    /// The scored assignment.
    pub candidate: Candidate,
    /// Standard deviation of group totals (lower = better).
    pub score: f64,
}
