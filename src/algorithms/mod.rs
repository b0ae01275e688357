//! Ranking algorithms (transition model, random-surfer sampling, iteration)
//!
//! Both rankers read an immutable [`Corpus`](crate::Corpus) and return a fresh
//! [`RankVector`]; nothing is shared between runs.

pub mod distribution;
pub mod pagerank;
pub mod sampling;
pub mod transition;

pub use distribution::{Distribution, RankVector, TransitionDistribution};
pub use pagerank::{iterate_pagerank, iterate_pagerank_with, IterationOptions, IterationOutcome};
pub use sampling::sample_pagerank;
pub use transition::{transition_model, transition_weights};
