//! pagerank CLI
//!
//! Ranks the pages of an HTML corpus directory by sampling and by iteration.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use surfer_rank::logging::env_log_filter;
use surfer_rank::{crawl, RankConfig, RankReport, DAMPING, MAX_ITERATIONS, SAMPLES, TOLERANCE};

/// Estimate `PageRank` for a directory of HTML pages
#[derive(Debug, Parser)]
#[command(name = "pagerank", version, about)]
struct Cli {
    /// Directory containing the corpus `*.html` pages
    corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(long, default_value_t = DAMPING)]
    damping: f64,

    /// Random-surfer samples for the sampling estimate
    #[arg(long, default_value_t = SAMPLES)]
    samples: usize,

    /// Per-page convergence threshold for the iterative estimate
    #[arg(long, default_value_t = TOLERANCE)]
    tolerance: f64,

    /// Iteration cap for the iterative estimate
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,

    /// Seed the sampler for reproducible output
    #[arg(long, env = "PAGERANK_SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> RankConfig {
        RankConfig {
            damping: self.damping,
            samples: self.samples,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            seed: self.seed,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env_log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let corpus = crawl(&cli.corpus).await?;
    let report = RankReport::compute(&corpus, &config)
        .with_context(|| format!("Failed to rank {}", cli.corpus.display()))?;

    print!("{report}");

    Ok(())
}
