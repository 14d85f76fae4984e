//! Balancing problem definition.
//!
//! Holds the immutable inputs (group count, entity weights, entity labels)
//! and exposes the pipeline operations as methods. Every stage reads the
//! problem; none mutates it.

use rand::Rng;

use super::{filter, generator, report, runner, scorer};
use crate::error::{BalanceError, BalanceResult};
use crate::models::{Batch, Candidate, GroupId, GroupSummary};
use crate::validation::validate_problem;

/// Problem definition: split N weighted entities into M non-empty groups.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_balance::sampling::BalanceProblem;
///
/// let problem = BalanceProblem::new(2, vec![10.0; 4], ["a", "b", "c", "d"]).unwrap();
/// let mut rng = SmallRng::seed_from_u64(7);
/// let best = problem.best_of(1000, &mut rng).unwrap();
/// assert_eq!(problem.score(&best), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceProblem {
    group_count: usize,
    weights: Vec<f64>,
    labels: Vec<String>,
}

impl BalanceProblem {
    /// Creates a problem after validating its inputs.
    ///
    /// # Errors
    /// [`BalanceError::Configuration`] listing every issue found when the
    /// lengths differ, a weight is not a positive finite number, or
    /// `group_count` lies outside `1..=N`.
    pub fn new<L>(
        group_count: usize,
        weights: impl Into<Vec<f64>>,
        labels: L,
    ) -> BalanceResult<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let weights = weights.into();
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        validate_problem(group_count, &weights, &labels).map_err(BalanceError::Configuration)?;
        Ok(Self {
            group_count,
            weights,
            labels,
        })
    }

    /// Number of target groups (M).
    #[inline]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Number of entities (N).
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.weights.len()
    }

    /// Entity weights in entity order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Entity labels in entity order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Sum of all entity weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Builds a candidate from caller-supplied genes.
    ///
    /// # Errors
    /// [`BalanceError::InvalidCandidate`] when the length differs from N or
    /// a gene lies outside `1..=M`.
    pub fn candidate(&self, genes: Vec<GroupId>) -> BalanceResult<Candidate> {
        if genes.len() != self.entity_count() {
            return Err(BalanceError::InvalidCandidate {
                reason: format!("{} genes for {} entities", genes.len(), self.entity_count()),
            });
        }
        if let Some((idx, g)) = genes
            .iter()
            .enumerate()
            .find(|&(_, &g)| g == 0 || g > self.group_count)
        {
            return Err(BalanceError::InvalidCandidate {
                reason: format!(
                    "entity {} assigned to group {} outside 1..={}",
                    idx, g, self.group_count
                ),
            });
        }
        Ok(Candidate::from_genes(genes))
    }

    /// Generates `n` raw (unvalidated) candidates.
    ///
    /// Draws exactly the batch [`best_of`](Self::best_of) evaluates for the
    /// same RNG state.
    pub fn generate<R: Rng>(&self, n: usize, rng: &mut R) -> Batch {
        generator::generate_chunked(self, n, rng, false)
    }

    /// Whether `candidate` uses every group.
    pub fn is_valid(&self, candidate: &Candidate) -> bool {
        filter::is_valid(self, candidate)
    }

    /// Valid subset of `batch`, in original order.
    pub fn filter_valid(&self, batch: &Batch) -> Batch {
        filter::filter_valid(self, batch)
    }

    /// Per-group weight sums for `candidate`.
    pub fn group_sums(&self, candidate: &Candidate) -> Vec<f64> {
        scorer::group_sums(self, candidate)
    }

    /// Standard deviation of group sums (lower = better).
    ///
    /// # Panics
    /// If the candidate length differs from N or a gene is out of range.
    pub fn score(&self, candidate: &Candidate) -> f64 {
        scorer::score(self, candidate)
    }

    /// Scores every candidate in `batch`, preserving order.
    pub fn evaluate(&self, batch: &Batch) -> Vec<f64> {
        scorer::evaluate(self, batch)
    }

    /// Samples `n_tries` candidates and returns the best valid one.
    ///
    /// # Errors
    /// [`BalanceError::EmptyResult`] when no sampled candidate uses every group.
    pub fn best_of<R: Rng>(&self, n_tries: usize, rng: &mut R) -> BalanceResult<Candidate> {
        let config = runner::SamplingConfig::default().with_n_tries(n_tries);
        runner::SamplingRunner::run_with_rng(self, &config, rng).map(|result| result.best)
    }

    /// Group weights and memberships for `candidate`.
    ///
    /// # Panics
    /// If the candidate length differs from N or a gene is out of range.
    pub fn summarize(&self, candidate: &Candidate) -> GroupSummary {
        report::summarize(self, candidate)
    }

    /// Asserts `candidate` fits this problem. Scoring or summarizing a
    /// mis-shaped candidate is a caller bug, not a recoverable error.
    pub(crate) fn assert_fits(&self, candidate: &Candidate) {
        assert_eq!(
            candidate.len(),
            self.entity_count(),
            "candidate has {} genes but the problem has {} entities",
            candidate.len(),
            self.entity_count()
        );
        assert!(
            candidate
                .genes()
                .iter()
                .all(|&g| (1..=self.group_count).contains(&g)),
            "candidate has a group id outside 1..={}",
            self.group_count
        );
    }
}
