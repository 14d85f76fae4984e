//! Splits seven departments into four groups of similar headcount.
//!
//! Run with `cargo run --example balance_departments`. Set `RUST_LOG=debug`
//! to see per-stage counts.

use std::error::Error;

use tracing_subscriber::EnvFilter;
use u_balance::sampling::{BalanceProblem, SamplingConfig, SamplingRunner};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();

    let problem = BalanceProblem::new(
        4,
        vec![27.0, 19.0, 12.0, 9.0, 8.0, 7.0, 6.0],
        [
            "BU LOTERIE",
            "FONCTION COMMERCIALE",
            "BU SPORT",
            "DIRECTION CLIENTS",
            "DIRECTION DATA & IA",
            "ABU PAIEMENT ET SERVICES",
            "FINANCE",
        ],
    )?;

    let config = SamplingConfig::default()
        .with_n_tries(10_000)
        .with_parallel(true)
        .with_keep_ranked(10);
    let result = SamplingRunner::run(&problem, &config)?;

    let scores: Vec<String> = result
        .ranked
        .iter()
        .map(|s| format!("{:.4}", s.score))
        .collect();
    println!("best scores: [{}]", scores.join(", "));

    println!("best candidates:");
    for scored in result.ranked.iter().take(5) {
        println!("  {:?}", scored.candidate.genes());
    }

    let summary = problem.summarize(&result.best);
    println!("group sizes: {:?}", summary.group_sizes());
    println!("groups:");
    print!("{}", summary);
    println!(
        "valid candidates: {} / {} ({:.1}%)",
        result.valid_count,
        result.tries,
        result.valid_ratio() * 100.0
    );

    Ok(())
}
