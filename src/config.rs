//! Ranking parameters and their defaults

use crate::algorithms::IterationOptions;
use crate::error::{check_damping, RankError};

/// Damping factor for `PageRank` (Google standard)
pub const DAMPING: f64 = 0.85;

/// Random-surfer samples taken by the sampling ranker
pub const SAMPLES: usize = 10_000;

/// Per-page convergence threshold of the iterative ranker
pub const TOLERANCE: f64 = 0.001;

/// Iteration cap of the iterative ranker
pub const MAX_ITERATIONS: usize = 1000;

/// Parameters for a ranking run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping
    pub damping: f64,
    /// Number of random-surfer samples
    pub samples: usize,
    /// Convergence threshold for iteration
    pub tolerance: f64,
    /// Iteration cap
    pub max_iterations: usize,
    /// Seed for the sampler; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RankConfig {
    /// Stopping rule for the iterative ranker
    #[must_use]
    pub const fn iteration_options(&self) -> IterationOptions {
        IterationOptions {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    /// Reject parameters the rankers cannot run with
    ///
    /// # Errors
    ///
    /// Returns the first [`RankError`] found among damping, sample count and the
    /// iteration stopping rule
    pub fn validate(&self) -> Result<(), RankError> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::ZeroSamples);
        }
        self.iteration_options().validate()
    }
}
