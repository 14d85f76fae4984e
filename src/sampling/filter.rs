//! Validity filtering.
//!
//! A candidate is valid when it uses exactly `group_count` distinct group
//! ids, i.e. every group receives at least one entity. Invalid candidates
//! are removed before scoring; they are never scored and then ignored.

use rayon::prelude::*;

use super::BalanceProblem;
use crate::models::{Batch, Candidate};

/// Whether `candidate` is well-formed and uses every group of `problem`.
///
/// Candidates with the wrong length or out-of-range genes are invalid.
pub fn is_valid(problem: &BalanceProblem, candidate: &Candidate) -> bool {
    let m = problem.group_count();
    if candidate.len() != problem.entity_count() {
        return false;
    }
    let mut used = vec![false; m];
    let mut distinct = 0;
    for &g in candidate.genes() {
        if g == 0 || g > m {
            return false;
        }
        if !used[g - 1] {
            used[g - 1] = true;
            distinct += 1;
        }
    }
    distinct == m
}

/// Returns the valid subset of `batch`, preserving relative order.
///
/// Pure: `batch` is left untouched.
pub fn filter_valid(problem: &BalanceProblem, batch: &Batch) -> Batch {
    batch
        .iter()
        .filter(|c| is_valid(problem, c))
        .cloned()
        .collect()
}

/// Consuming variant of [`filter_valid`] used by the runner.
///
/// Parallel filtering keeps batch order.
pub fn retain_valid(problem: &BalanceProblem, batch: Batch, parallel: bool) -> Batch {
    let candidates = batch.into_inner();
    if parallel {
        candidates
            .into_par_iter()
            .filter(|c| is_valid(problem, c))
            .collect::<Vec<_>>()
            .into()
    } else {
        candidates
            .into_iter()
            .filter(|c| is_valid(problem, c))
            .collect()
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
    fn test_is_valid() {
        let p = department_problem();
        assert!(is_valid(&p, &c(&[1, 2, 3, 4, 1, 1, 1])));
        assert!(is_valid(&p, &c(&[4, 3, 2, 1, 4, 3, 2])));
        assert!(!is_valid(&p, &c(&[1, 1, 1, 1, 1, 1, 1])));
        assert!(!is_valid(&p, &c(&[1, 2, 3, 1, 2, 3, 1])));
    }

    #[test]
    fn test_malformed_is_invalid() {
        let p = department_problem();
        assert!(!is_valid(&p, &c(&[1, 2, 3, 4])));
        assert!(!is_valid(&p, &c(&[1, 2, 3, 4, 5, 1, 1])));
        assert!(!is_valid(&p, &c(&[0, 1, 2, 3, 4, 1, 1])));
    }

    #[test]
    fn test_filter_preserves_order() {
        let p = department_problem();
        let batch: Batch = vec![
            c(&[1, 2, 3, 4, 1, 1, 1]),
            c(&[1, 1, 1, 1, 1, 1, 1]),
            c(&[2, 2, 1, 3, 4, 4, 4]),
            c(&[1, 2, 2, 2, 2, 2, 2]),
            c(&[4, 3, 2, 1, 1, 1, 1]),
        ]
        .into();

        let valid = filter_valid(&p, &batch);
        assert_eq!(valid.len(), 3);
        assert_eq!(valid.get(0), batch.get(0));
        assert_eq!(valid.get(1), batch.get(2));
        assert_eq!(valid.get(2), batch.get(4));
        // input untouched
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_filter_matches_distinct_count_predicate() {
        let p = department_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let batch = p.generate(3000, &mut rng);

        let expected: Vec<&Candidate> = batch
            .iter()
            .filter(|c| c.distinct_groups() == p.group_count())
            .collect();
        let valid = filter_valid(&p, &batch);
        assert_eq!(valid.len(), expected.len());
        assert!(valid.iter().zip(expected).all(|(a, b)| a == b));
    }

    #[test]
    fn test_retain_parallel_matches_sequential() {
        let p = department_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let batch = p.generate(3000, &mut rng);

        let reference = filter_valid(&p, &batch);
        assert_eq!(retain_valid(&p, batch.clone(), false), reference);
        assert_eq!(retain_valid(&p, batch, true), reference);
    }

    #[test]
    fn test_empty_survivors() {
        let p = department_problem();
        let batch: Batch = vec![c(&[1, 1, 1, 1, 1, 1, 1])].into();
        assert!(filter_valid(&p, &batch).is_empty());
    }
}
