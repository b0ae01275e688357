//! Monte Carlo `PageRank` via a random-surfer walk
//!
//! The surfer starts on a uniformly chosen page and takes `n - 1` steps, each drawn
//! from the [transition model](super::transition). Visit frequencies approximate the
//! stationary distribution of the chain; the estimate converges only in expectation
//! as `n` grows.

use super::distribution::RankVector;
use super::transition::transition_weights;
use crate::error::{check_damping, RankError};
use crate::storage::{Corpus, PageId};
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;
use tracing::debug;

/// Estimate `PageRank` by sampling `n` pages of a random-surfer walk
///
/// The random source is injected so callers can seed it for reproducible runs.
///
/// # Errors
///
/// - [`RankError::ZeroSamples`] if `n == 0`
/// - [`RankError::InvalidDampingFactor`] if `damping_factor` is outside `[0, 1]`
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use surfer_rank::{sample_pagerank, Corpus};
///
/// let corpus = Corpus::from_links([
///     ("1.html", vec!["2.html"]),
///     ("2.html", vec!["1.html"]),
/// ]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let ranks = sample_pagerank(&corpus, 0.85, 10_000, &mut rng).unwrap();
/// assert!((ranks.sum() - 1.0).abs() < 1e-9);
/// assert!((ranks.get("1.html").unwrap() - 0.5).abs() < 0.05);
/// ```
#[allow(clippy::cast_precision_loss)] // Sample counts >2^52 unlikely
#[allow(clippy::cast_possible_truncation)] // Corpora >4B pages not supported
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping_factor: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankVector, RankError> {
    check_damping(damping_factor)?;
    if n == 0 {
        return Err(RankError::ZeroSamples);
    }

    let num_pages = corpus.num_pages();
    let mut counts = vec![0_u64; num_pages];

    // Weighted tables are built on first visit and reused
    let mut tables: Vec<Option<WeightedIndex<f64>>> = (0..num_pages).map(|_| None).collect();

    let mut current = PageId(rng.gen_range(0..num_pages) as u32);
    counts[current.index()] += 1;

    for _ in 1..n {
        let table = tables[current.index()]
            .get_or_insert_with(|| weighted_table(corpus, current, damping_factor));

        current = PageId(table.sample(rng) as u32);
        counts[current.index()] += 1;
    }

    debug!(
        samples = n,
        visited = counts.iter().filter(|&&c| c > 0).count(),
        pages = num_pages,
        "sampled random-surfer walk"
    );

    let values = counts.iter().map(|&c| c as f64 / n as f64).collect();
    Ok(corpus.distribution(values))
}

// Weights from a damping factor in [0, 1] are finite, non-negative and sum to 1
#[allow(clippy::expect_used)]
fn weighted_table(corpus: &Corpus, page: PageId, damping_factor: f64) -> WeightedIndex<f64> {
    WeightedIndex::new(transition_weights(corpus, page, damping_factor))
        .expect("transition weights form a distribution")
}
