// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line entry point.
//!
//! Usage: `polyinj [BOUND]`. Progress and any counterexample are printed to
//! stdout; diagnostics go to stderr, controlled by `RUST_LOG`.

use anyhow::Context as _;
use clap::Parser;
use polyinj_search::config::{DEFAULT_BOUND, MAX_BOUND};
use polyinj_search::{search, SearchConfig, SearchContext, SearchOutcome};

#[derive(Parser)]
#[command(name = "polyinj")]
#[command(about = "Search for rationals where x^7 + 3y^7 takes the same value twice")]
struct Cli {
    /// Exclusive bound on the x1 and y1 enumeration indices.
    #[arg(default_value_t = DEFAULT_BOUND, value_parser = clap::value_parser!(u64).range(..=MAX_BOUND))]
    bound: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SearchConfig::new(cli.bound)?;
    let mut ctx = SearchContext::with_config(config);
    let outcome = search(&mut ctx)
        .with_context(|| format!("search with bound {} failed", config.bound()))?;

    match outcome {
        SearchOutcome::Counterexample(counterexample) => {
            log::info!(
                "f is not injective: value {} at {}",
                counterexample.value,
                counterexample.codes
            );
        }
        SearchOutcome::Exhausted => {
            log::info!("No counterexample below bound {}", config.bound());
        }
    }
    Ok(())
}
