//! Typed errors for corpus construction and the rankers

use thiserror::Error;

/// Errors raised by the graph model and the ranking algorithms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// Corpus has no pages
    #[error("corpus contains no pages")]
    EmptyCorpus,

    /// A link points at a page that is not part of the corpus
    #[error("page {from:?} links to {to:?}, which is not in the corpus")]
    DanglingLink {
        /// Page holding the link
        from: String,
        /// Missing target
        to: String,
    },

    /// Page name not present in the corpus
    #[error("unknown page: {0:?}")]
    UnknownPage(String),

    /// Damping factor is NaN or outside `[0, 1]`
    #[error("damping factor must lie in [0, 1], got {0}")]
    InvalidDampingFactor(f64),

    /// Sampling needs at least one sample
    #[error("sample count must be at least 1")]
    ZeroSamples,

    /// Convergence threshold is NaN or not positive
    #[error("convergence tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    /// Iteration cap of zero
    #[error("iteration cap must be at least 1")]
    InvalidIterationCap,
}

/// Check that `damping_factor` is a usable probability
///
/// # Errors
///
/// Returns [`RankError::InvalidDampingFactor`] for NaN or values outside `[0, 1]`
pub fn check_damping(damping_factor: f64) -> Result<(), RankError> {
    if (0.0..=1.0).contains(&damping_factor) {
        Ok(())
    } else {
        Err(RankError::InvalidDampingFactor(damping_factor))
    }
}
