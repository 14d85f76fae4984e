//! Uniformity scoring.
//!
//! The score of a candidate is the population standard deviation of its
//! per-group weight sums. Zero means every group weighs the same.
//! Each candidate is scored independently of the others.

use rayon::prelude::*;

use super::BalanceProblem;
use crate::models::{Batch, Candidate, ScoredCandidate};
use crate::stats;

/// Per-group weight sums, index `g - 1` for group `g`.
///
/// # Panics
/// If the candidate does not fit the problem (length or gene range).
pub fn group_sums(problem: &BalanceProblem, candidate: &Candidate) -> Vec<f64> {
    problem.assert_fits(candidate);
    let mut sums = vec![0.0; problem.group_count()];
    for (&g, &w) in candidate.genes().iter().zip(problem.weights()) {
        sums[g - 1] += w;
    }
    sums
}

/// Population standard deviation of the group sums.
///
/// # Panics
/// If the candidate does not fit the problem (length or gene range).
pub fn score(problem: &BalanceProblem, candidate: &Candidate) -> f64 {
    stats::population_std_dev(&group_sums(problem, candidate))
}

/// Scores every candidate of `batch`, in batch order.
pub fn evaluate(problem: &BalanceProblem, batch: &Batch) -> Vec<f64> {
    batch.iter().map(|c| score(problem, c)).collect()
}

/// Pairs each candidate with its score and batch index.
///
/// Callers must pass an already-filtered batch.
pub fn score_all(
    problem: &BalanceProblem,
    batch: Batch,
    parallel: bool,
) -> Vec<ScoredCandidate> {
    let to_scored = |(index, candidate): (usize, Candidate)| ScoredCandidate {
        index,
        score: score(problem, &candidate),
        candidate,
    };
    let candidates = batch.into_inner();
    if parallel {
        candidates
            .into_par_iter()
            .enumerate()
            .map(to_scored)
            .collect()
    } else {
        candidates.into_iter().enumerate().map(to_scored).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::fixtures::department_problem;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn c(genes: &[usize]) -> Candidate {
        Candidate::from_genes(genes.to_vec())
    }

    #[test]
    fn test_group_sums() {
        let p = department_problem();
        // weights 27, 19, 12, 9, 8, 7, 6
        let sums = group_sums(&p, &c(&[1, 2, 3, 4, 3, 4, 4]));
        assert_eq!(sums, vec![27.0, 19.0, 20.0, 22.0]);
        assert_eq!(sums.iter().sum::<f64>(), 88.0);
    }

    #[test]
    fn test_score_population_std_dev() {
        let p = department_problem();
        let s = score(&p, &c(&[1, 2, 3, 4, 3, 4, 4]));
        // mean 22, deviations 5, -3, -2, 0 -> variance 38/4
        assert!((s - (38.0f64 / 4.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_balance_scores_zero() {
        let p = BalanceProblem::new(2, vec![10.0; 4], ["a", "b", "c", "d"]).unwrap();
        assert_eq!(score(&p, &c(&[1, 2, 2, 1])), 0.0);
        assert_eq!(score(&p, &c(&[2, 2, 1, 1])), 0.0);
        assert!(score(&p, &c(&[1, 2, 2, 2])) > 0.0);
    }

    #[test]
    fn test_score_invariant_under_relabeling() {
        let p = department_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let batch = p.filter_valid(&p.generate(500, &mut rng));
        let perm = [3, 1, 4, 2]; // group g -> perm[g - 1]

        for cand in &batch {
            let relabeled = c(&cand.genes().iter().map(|&g| perm[g - 1]).collect::<Vec<_>>());
            assert!((score(&p, cand) - score(&p, &relabeled)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_evaluate_keeps_order() {
        let p = department_problem();
        let batch: Batch = vec![c(&[1, 2, 3, 4, 3, 4, 4]), c(&[1, 1, 2, 3, 4, 4, 4])].into();
        let scores = evaluate(&p, &batch);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0], score(&p, &batch.candidates()[0]));
        assert_eq!(scores[1], score(&p, &batch.candidates()[1]));
    }

    #[test]
    fn test_score_all_parallel_matches_sequential() {
        let p = department_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let valid = p.filter_valid(&p.generate(2000, &mut rng));

        let seq = score_all(&p, valid.clone(), false);
        let par = score_all(&p, valid, true);
        assert_eq!(seq, par);
        assert!(seq.iter().enumerate().all(|(i, s)| s.index == i));
        assert!(seq.iter().all(|s| s.score >= 0.0));
    }

    #[test]
    #[should_panic(expected = "outside 1..=4")]
    fn test_out_of_range_gene_panics() {
        let p = department_problem();
        score(&p, &c(&[1, 2, 3, 4, 5, 1, 1]));
    }
}
