//! Repeated random sampling for balanced partitions.
//!
//! A heuristic: draw many random assignments, drop the ones that leave a
//! group empty, score the rest by the spread of group totals and keep the
//! best. Solution quality depends on the number of tries; nothing bounds
//! how close the result is to the optimum.
//!
//! # Pipeline
//!
//! | Stage | Function | Output |
//! |-------|----------|--------|
//! | Generate | [`generator::generate_chunked`] | Raw `Batch` |
//! | Filter | [`filter::filter_valid`] | Candidates using every group |
//! | Score | [`scorer::score`] | Std. dev. of group totals |
//! | Select | [`selector::select_best`] | Lowest score, earliest on ties |
//! | Report | [`report::summarize`] | `GroupSummary` |
//!
//! Every stage works per candidate, so [`SamplingRunner`] can spread a
//! batch over the rayon pool without changing the winner.

pub mod filter;
pub mod generator;
mod problem;
pub mod report;
mod runner;
pub mod scorer;
pub mod selector;

pub use problem::BalanceProblem;
pub use runner::{SamplingConfig, SamplingResult, SamplingRunner};
