//! Best-of-N sampling runner.
//!
//! Runs the full pipeline: generate → filter → score → select.
//!
//! # Example
//! ```
//! use u_balance::sampling::{BalanceProblem, SamplingConfig, SamplingRunner};
//!
//! let problem = BalanceProblem::new(
//!     4,
//!     vec![27.0, 19.0, 12.0, 9.0, 8.0, 7.0, 6.0],
//!     ["A", "B", "C", "D", "E", "F", "G"],
//! )
//! .unwrap();
//! let config = SamplingConfig::default()
//!     .with_n_tries(10_000)
//!     .with_seed(42)
//!     .with_keep_ranked(5);
//!
//! let result = SamplingRunner::run(&problem, &config).unwrap();
//! assert!(problem.is_valid(&result.best));
//! assert_eq!(result.ranked.len(), 5);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{filter, generator, scorer, selector, BalanceProblem};
use crate::error::{BalanceError, BalanceResult};
use crate::models::{Candidate, ScoredCandidate};

/// Sampling parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of random candidates to generate.
    pub n_tries: usize,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Generate, filter and score on the rayon pool.
    pub parallel: bool,
    /// How many of the best scored candidates to return in rank order.
    pub keep_ranked: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            n_tries: 10_000,
            seed: None,
            parallel: false,
            keep_ranked: 0,
        }
    }
}

impl SamplingConfig {
    /// Sets the number of tries.
    pub fn with_n_tries(mut self, n_tries: usize) -> Self {
        self.n_tries = n_tries;
        self
    }

    /// Sets a fixed seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets how many ranked candidates to keep in the result.
    pub fn with_keep_ranked(mut self, keep_ranked: usize) -> Self {
        self.keep_ranked = keep_ranked;
        self
    }
}

/// Outcome of a sampling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingResult {
    /// Best valid candidate found.
    pub best: Candidate,
    /// Score of `best`.
    pub best_score: f64,
    /// Number of candidates generated.
    pub tries: usize,
    /// Number of candidates that used every group.
    pub valid_count: usize,
    /// Up to `keep_ranked` best candidates, best-first.
    pub ranked: Vec<ScoredCandidate>,
}

impl SamplingResult {
    /// Fraction of generated candidates that were valid.
    pub fn valid_ratio(&self) -> f64 {
        if self.tries == 0 {
            0.0
        } else {
            self.valid_count as f64 / self.tries as f64
        }
    }
}

/// Runs best-of-N sampling on a [`BalanceProblem`].
pub struct SamplingRunner;

impl SamplingRunner {
    /// Runs with an RNG seeded from `config.seed`, or from the OS.
    ///
    /// # Errors
    /// [`BalanceError::EmptyResult`] when no candidate uses every group.
    pub fn run(problem: &BalanceProblem, config: &SamplingConfig) -> BalanceResult<SamplingResult> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs with a caller-supplied RNG. `config.seed` is ignored.
    ///
    /// # Errors
    /// [`BalanceError::EmptyResult`] when no candidate uses every group.
    #[instrument(
        skip_all,
        fields(n_tries = config.n_tries, groups = problem.group_count(), parallel = config.parallel)
    )]
    pub fn run_with_rng<R: Rng>(
        problem: &BalanceProblem,
        config: &SamplingConfig,
        rng: &mut R,
    ) -> BalanceResult<SamplingResult> {
        let batch = generator::generate_chunked(problem, config.n_tries, rng, config.parallel);
        debug!(generated = batch.len(), "generated candidates");

        let valid = filter::retain_valid(problem, batch, config.parallel);
        let valid_count = valid.len();
        debug!(valid = valid_count, "filtered candidates");

        let scored = scorer::score_all(problem, valid, config.parallel);

        let (best, ranked) = if config.keep_ranked > 0 {
            let ranked = selector::top_k(scored, config.keep_ranked);
            (ranked.first().cloned(), ranked)
        } else {
            (selector::select_best(&scored).cloned(), Vec::new())
        };

        // Selection only comes back empty when no candidate survived filtering.
        let Some(best) = best else {
            warn!("no candidate used every group");
            return Err(BalanceError::EmptyResult {
                tries: config.n_tries,
                group_count: problem.group_count(),
            });
        };

        info!(best_score = best.score, valid = valid_count, "sampling finished");

        Ok(SamplingResult {
            best: best.candidate,
            best_score: best.score,
            tries: config.n_tries,
            valid_count,
            ranked,
        })
    }
}
