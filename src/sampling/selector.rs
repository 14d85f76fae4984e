//! Best-candidate selection and ranking.
//!
//! Lower score wins. Equal scores are broken by batch index so the
//! earliest candidate wins, regardless of how scoring was scheduled.

use std::cmp::Ordering;

use crate::models::ScoredCandidate;

fn by_score_then_index(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.index.cmp(&b.index))
}

/// Minimum-score candidate; the lowest index wins ties.
///
/// Returns `None` for an empty slice.
pub fn select_best(scored: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    scored.iter().min_by(|a, b| by_score_then_index(a, b))
}

/// Sorts scored candidates best-first. Ties keep batch order.
pub fn rank(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(by_score_then_index);
    scored
}

/// The `k` best candidates, best-first.
pub fn top_k(scored: Vec<ScoredCandidate>, k: usize) -> Vec<ScoredCandidate> {
    let mut ranked = rank(scored);
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Candidate;

    fn sc(index: usize, score: f64) -> ScoredCandidate {
        ScoredCandidate {
            index,
            candidate: Candidate::from_genes(vec![index + 1]),
            score,
        }
    }

    #[test]
    fn test_select_minimum() {
        let scored = vec![sc(0, 3.0), sc(1, 1.5), sc(2, 2.0)];
        assert_eq!(select_best(&scored).map(|s| s.index), Some(1));
    }

    #[test]
    fn test_first_occurrence_wins_ties() {
        let scored = vec![sc(0, 2.0), sc(1, 0.5), sc(2, 0.5), sc(3, 0.5)];
        assert_eq!(select_best(&scored).map(|s| s.index), Some(1));
    }

    #[test]
    fn test_tie_break_uses_index_not_position() {
        // out-of-order input, as if collected from workers
        let scored = vec![sc(5, 1.0), sc(2, 1.0), sc(7, 4.0)];
        assert_eq!(select_best(&scored).map(|s| s.index), Some(2));
    }

    #[test]
    fn test_empty_selection() {
        assert!(select_best(&[]).is_none());
    }

    #[test]
    fn test_rank_is_stable() {
        let ranked = rank(vec![sc(0, 2.0), sc(1, 1.0), sc(2, 2.0), sc(3, 0.0)]);
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_top_k() {
        let top = top_k(vec![sc(0, 2.0), sc(1, 1.0), sc(2, 3.0)], 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].index, 1);
        assert_eq!(top[1].index, 0);
        assert_eq!(top_k(vec![sc(0, 1.0)], 5).len(), 1);
    }
}
