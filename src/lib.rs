//! surfer-rank: `PageRank` for small hyperlink corpora
//!
//! # Overview
//!
//! Estimates the importance of pages in a closed hyperlink graph two ways:
//! a random-surfer Monte Carlo walk and the fixed-point `PageRank` recurrence.
//! Both estimate the stationary distribution of the same Markov chain.
//!
//! # Quick Start
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use surfer_rank::{iterate_pagerank, sample_pagerank, Corpus, DAMPING};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = Corpus::from_links([
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html", "3.html"]),
//!     ("3.html", vec!["2.html", "4.html"]),
//!     ("4.html", vec!["2.html"]),
//! ])?;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let sampled = sample_pagerank(&corpus, DAMPING, 10_000, &mut rng)?;
//! let iterated = iterate_pagerank(&corpus, DAMPING)?;
//!
//! assert!((iterated.get("2.html").unwrap_or_default() - 0.4289).abs() < 2e-3);
//! assert!(sampled.max_abs_diff(&iterated) < 0.05);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Storage**: CSR corpus with dead-end normalization, directory crawler
//! - **Algorithms**: transition model, sampling ranker, iterative ranker
//! - **Logging**: `RUST_LOG` filter for the binary, warnings by default
//! - **Report**: runs both rankers from a [`RankConfig`] and renders the results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod storage;

// Re-export core types
pub use algorithms::{
    iterate_pagerank, iterate_pagerank_with, sample_pagerank, transition_model, Distribution,
    IterationOptions, IterationOutcome, RankVector, TransitionDistribution,
};
pub use config::{RankConfig, DAMPING, MAX_ITERATIONS, SAMPLES, TOLERANCE};
pub use error::RankError;
pub use report::{format_ranks, RankReport};
pub use storage::{crawl, Corpus, PageId};

// Error type
pub use anyhow::{Error, Result};
