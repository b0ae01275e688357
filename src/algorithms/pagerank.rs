//! Iterative `PageRank` (fixed-point recurrence)
//!
//! Based on Page et al. (1999) "The `PageRank` Citation Ranking: Bringing Order to the Web".
//! Ranks start uniform and are recomputed from the previous generation until no page
//! moves by more than the tolerance.

use super::distribution::RankVector;
use crate::config::{MAX_ITERATIONS, TOLERANCE};
use crate::error::{check_damping, RankError};
use crate::storage::{Corpus, PageId};
use tracing::{debug, trace, warn};

/// Stopping rule for [`iterate_pagerank_with`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOptions {
    /// Stop once every page changes by less than this between iterations
    pub tolerance: f64,
    /// Hard cap on iterations
    pub max_iterations: usize,
}

impl Default for IterationOptions {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl IterationOptions {
    /// Check the stopping rule
    ///
    /// # Errors
    ///
    /// - [`RankError::InvalidTolerance`] for NaN or non-positive tolerance
    /// - [`RankError::InvalidIterationCap`] for a zero cap
    pub fn validate(&self) -> Result<(), RankError> {
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(RankError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidIterationCap);
        }
        Ok(())
    }
}

/// Result of an iterative run
#[derive(Debug, Clone, PartialEq)]
pub struct IterationOutcome {
    /// Final rank vector
    pub ranks: RankVector,
    /// Iterations performed
    pub iterations: usize,
    /// Largest per-page change in the last iteration
    pub max_delta: f64,
    /// Whether the tolerance was reached before the cap
    pub converged: bool,
}

/// Compute `PageRank` by iterating the recurrence until convergence
///
/// Uses the default tolerance (0.001 per page) and iteration cap (1000).
///
/// # Algorithm
///
/// ```text
/// PR(p) = (1-d)/N + d * Σ(PR(i) / NumLinks(i))   for every i linking to p
/// ```
///
/// Link sets are the normalized ones, so a former dead end contributes to every page.
///
/// # Errors
///
/// Returns [`RankError::InvalidDampingFactor`] if `damping_factor` is outside `[0, 1]`
///
/// # Example
///
/// ```
/// use surfer_rank::{iterate_pagerank, Corpus};
///
/// let corpus = Corpus::from_links([
///     ("1.html", vec!["2.html"]),
///     ("2.html", vec!["3.html"]),
///     ("3.html", vec!["1.html"]),
/// ]).unwrap();
///
/// let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
/// for (_, rank) in ranks.iter() {
///     assert!((rank - 1.0 / 3.0).abs() < 1e-3);
/// }
/// ```
pub fn iterate_pagerank(corpus: &Corpus, damping_factor: f64) -> Result<RankVector, RankError> {
    iterate_pagerank_with(corpus, damping_factor, &IterationOptions::default())
        .map(|outcome| outcome.ranks)
}

/// Iterative `PageRank` with an explicit stopping rule
///
/// Hitting `max_iterations` is not an error: the last generation is returned with
/// `converged == false`.
///
/// # Errors
///
/// - [`RankError::InvalidDampingFactor`] if `damping_factor` is outside `[0, 1]`
/// - [`RankError::InvalidTolerance`] / [`RankError::InvalidIterationCap`] for a bad
///   stopping rule
#[allow(clippy::cast_precision_loss)] // Corpora >2^52 pages unlikely
#[allow(clippy::cast_possible_truncation)] // Corpora >4B pages not supported
pub fn iterate_pagerank_with(
    corpus: &Corpus,
    damping_factor: f64,
    options: &IterationOptions,
) -> Result<IterationOutcome, RankError> {
    check_damping(damping_factor)?;
    options.validate()?;

    let n = corpus.num_pages();
    let teleport = (1.0 - damping_factor) / n as f64;

    // Initialize: uniform distribution
    let mut ranks = vec![1.0 / n as f64; n];
    let mut new_ranks = vec![0.0; n];

    let out_degrees: Vec<f64> = (0..n)
        .map(|page| corpus.out_degree(PageId(page as u32)) as f64)
        .collect();

    let mut iterations = 0;
    let mut max_delta = f64::INFINITY;

    while iterations < options.max_iterations {
        iterations += 1;

        // Gather from the previous generation only
        for (page, slot) in new_ranks.iter_mut().enumerate() {
            let inbound: f64 = corpus
                .incoming(PageId(page as u32))
                .iter()
                .map(|&src| ranks[src as usize] / out_degrees[src as usize])
                .sum();
            *slot = teleport + damping_factor * inbound;
        }

        max_delta = ranks
            .iter()
            .zip(&new_ranks)
            .map(|(old, new)| (new - old).abs())
            .fold(0.0, f64::max);

        // Swap buffers
        std::mem::swap(&mut ranks, &mut new_ranks);

        trace!(iteration = iterations, max_delta, "pagerank iteration");

        if max_delta < options.tolerance {
            break;
        }
    }

    let converged = max_delta < options.tolerance;
    if converged {
        debug!(iterations, max_delta, "pagerank converged");
    } else {
        warn!(
            iterations,
            max_delta,
            tolerance = options.tolerance,
            "pagerank hit iteration cap before converging"
        );
    }

    Ok(IterationOutcome {
        ranks: corpus.distribution(ranks),
        iterations,
        max_delta,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readme_corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_iterate_readme_example() {
        let corpus = readme_corpus();

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();

        let expected = [
            ("1.html", 0.2202),
            ("2.html", 0.4289),
            ("3.html", 0.2202),
            ("4.html", 0.1307),
        ];
        for (page, want) in expected {
            let got = ranks.get(page).unwrap();
            assert!((got - want).abs() < 2e-3, "{page}: got {got}, want {want}");
        }
        assert!((ranks.sum() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_iterate_cycle_uniform() {
        // Cycle: 0 → 1 → 2 → 0
        let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])])
            .unwrap();

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();

        for (_, score) in ranks.iter() {
            assert!((score - 1.0 / 3.0).abs() < 0.01, "Score = {score}");
        }
    }

    #[test]
    fn test_iterate_star() {
        // Star: 1 → 0, 2 → 0, 3 → 0; centre is a dead end
        let corpus = Corpus::from_links([
            ("hub", vec![]),
            ("x", vec!["hub"]),
            ("y", vec!["hub"]),
            ("z", vec!["hub"]),
        ])
        .unwrap();

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        let hub = ranks.get("hub").unwrap();

        for leaf in ["x", "y", "z"] {
            assert!(hub > ranks.get(leaf).unwrap());
        }
        assert!((ranks.get("x").unwrap() - ranks.get("z").unwrap()).abs() < 1e-12);
        assert!((ranks.sum() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_iterate_single_page() {
        let corpus = Corpus::from_links([("A.html", Vec::<&str>::new())]).unwrap();

        let outcome =
            iterate_pagerank_with(&corpus, 0.85, &IterationOptions::default()).unwrap();

        assert!((outcome.ranks.get("A.html").unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.converged);
    }

    #[test]
    fn test_iterate_deterministic() {
        let corpus = readme_corpus();

        let a = iterate_pagerank(&corpus, 0.85).unwrap();
        let b = iterate_pagerank(&corpus, 0.85).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_iterate_tighter_tolerance_takes_longer() {
        let corpus = readme_corpus();

        let loose = iterate_pagerank_with(&corpus, 0.85, &IterationOptions::default()).unwrap();
        let tight = iterate_pagerank_with(
            &corpus,
            0.85,
            &IterationOptions {
                tolerance: 1e-10,
                max_iterations: 1000,
            },
        )
        .unwrap();

        assert!(tight.converged);
        assert!(tight.iterations > loose.iterations);
        assert!(tight.max_delta < 1e-10);
        assert!(loose.ranks.max_abs_diff(&tight.ranks) < 1e-3);
    }

    #[test]
    fn test_iterate_cap_reached() {
        // Uniform start is far from the stationary state, one step cannot converge
        let corpus = readme_corpus();

        let outcome = iterate_pagerank_with(
            &corpus,
            0.85,
            &IterationOptions {
                tolerance: 1e-12,
                max_iterations: 1,
            },
        )
        .unwrap();

        assert_eq!(outcome.iterations, 1);
        assert!(!outcome.converged);
        assert!((outcome.ranks.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_iterate_damping_boundaries() {
        let corpus = readme_corpus();

        // d = 0: every page gets 1/N
        let ranks = iterate_pagerank(&corpus, 0.0).unwrap();
        for (_, score) in ranks.iter() {
            assert!((score - 0.25).abs() < 1e-12);
        }

        // d = 1: pure link following still yields a distribution
        let ranks = iterate_pagerank(&corpus, 1.0).unwrap();
        assert!((ranks.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_iterate_invalid_inputs() {
        let corpus = readme_corpus();

        assert_eq!(
            iterate_pagerank(&corpus, f64::INFINITY).unwrap_err(),
            RankError::InvalidDampingFactor(f64::INFINITY)
        );
        assert_eq!(
            iterate_pagerank_with(
                &corpus,
                0.85,
                &IterationOptions {
                    tolerance: 0.0,
                    max_iterations: 10
                }
            )
            .unwrap_err(),
            RankError::InvalidTolerance(0.0)
        );
        assert_eq!(
            iterate_pagerank_with(
                &corpus,
                0.85,
                &IterationOptions {
                    tolerance: 0.001,
                    max_iterations: 0
                }
            )
            .unwrap_err(),
            RankError::InvalidIterationCap
        );
    }
}
