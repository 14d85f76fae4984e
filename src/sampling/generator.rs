//! Random candidate generation.
//!
//! Every gene is drawn independently and uniformly from `1..=M`. No
//! validity guarantee: a generated candidate may leave groups empty.
//!
//! [`generate_chunked`] cuts large batches into fixed-size chunks, each
//! with its own `SmallRng` seeded from the caller's RNG in chunk order.
//! The resulting batch depends only on the caller's RNG state, so
//! sequential and parallel generation yield identical candidates.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::BalanceProblem;
use crate::models::{Batch, Candidate};

/// Candidates per generation chunk.
pub const GENERATION_CHUNK: usize = 1024;

/// Creates one random candidate.
pub fn random_candidate<R: Rng>(problem: &BalanceProblem, rng: &mut R) -> Candidate {
    let m = problem.group_count();
    let genes = (0..problem.entity_count())
        .map(|_| rng.random_range(1..=m))
        .collect();
    Candidate::from_genes(genes)
}

/// Generates `n` random candidates from a single RNG stream.
pub fn generate<R: Rng>(problem: &BalanceProblem, n: usize, rng: &mut R) -> Batch {
    (0..n).map(|_| random_candidate(problem, rng)).collect()
}

/// Generates `n` random candidates in chunks of [`GENERATION_CHUNK`].
///
/// With `parallel` set, chunks are generated on the rayon pool. Output is
/// the same either way for a given `rng` state.
pub fn generate_chunked<R: Rng>(
    problem: &BalanceProblem,
    n: usize,
    rng: &mut R,
    parallel: bool,
) -> Batch {
    // Seeds are drawn up front so chunk streams don't depend on scheduling.
    let plan: Vec<(usize, u64)> = (0..n)
        .step_by(GENERATION_CHUNK)
        .map(|start| ((n - start).min(GENERATION_CHUNK), rng.random::<u64>()))
        .collect();

    let run_chunk = |&(len, seed): &(usize, u64)| {
        let mut chunk_rng = SmallRng::seed_from_u64(seed);
        generate(problem, len, &mut chunk_rng)
    };

    let chunks: Vec<Batch> = if parallel {
        plan.par_iter().map(run_chunk).collect()
    } else {
        plan.iter().map(run_chunk).collect()
    };

    let mut batch = Batch::with_capacity(n);
    for chunk in chunks {
        batch.extend(chunk);
    }
    batch
}
