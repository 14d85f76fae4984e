//! Balanced group partitioning for the U-Engine ecosystem.
//!
//! Splits N weighted entities into M non-empty groups so that group
//! totals are as even as possible (minimum standard deviation). The
//! search is a best-of-N random sampling heuristic, not an exact solver.
//!
//! # Modules
//!
//! - **`models`**: Data types — `Candidate`, `Batch`, `ScoredCandidate`,
//!   `GroupSummary`
//! - **`sampling`**: `BalanceProblem` and the generate → filter → score →
//!   select pipeline, plus `SamplingRunner`
//! - **`validation`**: Input integrity checks (lengths, weights, group count)
//! - **`error`**: `BalanceError`
//!
//! # Example
//!
//! ```
//! use u_balance::sampling::{BalanceProblem, SamplingConfig, SamplingRunner};
//!
//! let problem = BalanceProblem::new(2, vec![5.0, 3.0, 2.0], ["x", "y", "z"]).unwrap();
//! let config = SamplingConfig::default().with_n_tries(500).with_seed(1);
//! let result = SamplingRunner::run(&problem, &config).unwrap();
//!
//! let summary = problem.summarize(&result.best);
//! assert_eq!(summary.total_weight(), 10.0);
//! assert_eq!(result.best_score, 0.0); // {x} vs {y, z}
//! ```

pub mod error;
pub mod models;
pub mod sampling;
pub mod stats;
pub mod validation;

pub use error::{BalanceError, BalanceResult};
