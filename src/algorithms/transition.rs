//! Random-surfer transition model
//!
//! With probability `d` the surfer follows one of the current page's links, chosen
//! uniformly; with probability `1 - d` it jumps to any page of the corpus, chosen
//! uniformly. The two uniform distributions are mixed over the full page set:
//!
//! ```text
//! P(next = q | page) = (1-d)/N + [q ∈ links(page)] · d / |links(page)|
//! ```

use super::distribution::TransitionDistribution;
use crate::error::{check_damping, RankError};
use crate::storage::{Corpus, PageId};

/// Next-page distribution for a surfer on `current_page`
///
/// Every corpus page is present in the result, including pages `current_page` does
/// not link to (they receive `(1 - damping_factor) / N`).
///
/// # Errors
///
/// - [`RankError::UnknownPage`] if `current_page` is not in the corpus
/// - [`RankError::InvalidDampingFactor`] if `damping_factor` is outside `[0, 1]`
///
/// # Example
///
/// ```
/// use surfer_rank::{transition_model, Corpus};
///
/// let corpus = Corpus::from_links([
///     ("1.html", vec!["2.html", "3.html"]),
///     ("2.html", vec!["3.html"]),
///     ("3.html", vec!["2.html"]),
/// ]).unwrap();
///
/// let next = transition_model(&corpus, "1.html", 0.85).unwrap();
/// assert!((next.get("1.html").unwrap() - 0.05).abs() < 1e-9);
/// assert!((next.get("2.html").unwrap() - 0.475).abs() < 1e-9);
/// assert!((next.sum() - 1.0).abs() < 1e-9);
/// ```
pub fn transition_model(
    corpus: &Corpus,
    current_page: &str,
    damping_factor: f64,
) -> Result<TransitionDistribution, RankError> {
    check_damping(damping_factor)?;
    let page = corpus.require(current_page)?;

    let weights = transition_weights(corpus, page, damping_factor);
    Ok(corpus.distribution(weights))
}

/// Index-based transition probabilities, one entry per page in [`PageId`] order
///
/// Callers are responsible for passing a page of `corpus` and a validated damping
/// factor.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Corpora >2^52 pages unlikely
pub fn transition_weights(corpus: &Corpus, page: PageId, damping_factor: f64) -> Vec<f64> {
    let n = corpus.num_pages();
    let teleport = (1.0 - damping_factor) / n as f64;

    let mut weights = vec![teleport; n];

    let links = corpus.outgoing(page);
    // Normalization guarantees at least one link
    if !links.is_empty() {
        let follow = damping_factor / links.len() as f64;
        for &target in links {
            weights[target as usize] += follow;
        }
    }

    weights
}
