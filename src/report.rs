//! Running both rankers and rendering their results as text

use crate::algorithms::{iterate_pagerank_with, sample_pagerank, RankVector};
use crate::config::RankConfig;
use crate::error::RankError;
use crate::storage::Corpus;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Render a titled rank vector, one `  page: 0.1234` line per page in corpus order
#[must_use]
pub fn format_ranks(title: &str, ranks: &RankVector) -> String {
    let mut out = String::with_capacity(title.len() + 24 * ranks.len());
    out.push_str(title);
    out.push('\n');
    for (page, rank) in ranks.iter() {
        out.push_str(&format!("  {page}: {rank:.4}\n"));
    }
    out
}

/// Both rankers' results for one corpus
#[derive(Debug, Clone)]
pub struct RankReport {
    /// Samples used by the sampling ranker
    pub samples: usize,
    /// Sampling estimate
    pub sampled: RankVector,
    /// Iterative estimate
    pub iterated: RankVector,
}

impl RankReport {
    /// Run both rankers on `corpus`
    ///
    /// The sampler is seeded from `config.seed`, or from OS entropy when unset.
    ///
    /// # Errors
    ///
    /// Returns [`RankError`] if `config` holds parameters the rankers reject
    pub fn compute(corpus: &Corpus, config: &RankConfig) -> Result<Self, RankError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let sampled = sample_pagerank(corpus, config.damping, config.samples, &mut rng)?;
        let iterated =
            iterate_pagerank_with(corpus, config.damping, &config.iteration_options())?.ranks;

        Ok(Self {
            samples: config.samples,
            sampled,
            iterated,
        })
    }
}

impl fmt::Display for RankReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_ranks(
            &format!("PageRank Results from Sampling (n = {})", self.samples),
            &self.sampled,
        ))?;
        f.write_str(&format_ranks(
            "PageRank Results from Iteration",
            &self.iterated,
        ))
    }
}
