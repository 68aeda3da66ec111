//! Sampling estimator: empirical visit frequencies of the random-surfer chain.

use std::collections::BTreeMap;

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{LinkrankError, Result};
use crate::rank::transition::transition_model;
use crate::rank::{DEFAULT_DAMPING, DEFAULT_SAMPLES, check_damping};

/// Configuration for the sampling estimator.
#[derive(Debug, Clone, Copy)]
pub struct SampleConfig {
    /// Damping factor in (0, 1). Default: 0.85.
    pub damping: f64,
    /// Chain length: number of visits recorded. Default: 10,000.
    pub samples: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Estimate PageRank by simulating a first-order Markov chain of
/// `config.samples` steps over the corpus.
///
/// The first state is drawn uniformly among all pages. Each visit adds
/// exactly `1 / samples` to the current page's accumulator, then the next
/// state is drawn from the transition model of the current page, weighted
/// by probability mass. Visit frequencies converge in expectation to the
/// chain's stationary distribution as the sample count grows.
///
/// The caller injects the random source, so a seeded generator pins the
/// output exactly; the sum of the returned ranks is 1.0 up to rounding
/// regardless of the seed.
///
/// # Errors
///
/// Fails fast with [`LinkrankError::EmptyCorpus`],
/// [`LinkrankError::InvalidDamping`], or
/// [`LinkrankError::InvalidSampleCount`] before any sampling happens.
pub fn sample_pagerank<R: Rng + ?Sized>(
    corpus: &Corpus,
    config: &SampleConfig,
    rng: &mut R,
) -> Result<BTreeMap<String, f64>> {
    if corpus.is_empty() {
        return Err(LinkrankError::EmptyCorpus);
    }
    check_damping(config.damping)?;
    if config.samples == 0 {
        return Err(LinkrankError::InvalidSampleCount);
    }

    let weight = 1.0 / config.samples as f64;
    let mut ranks: BTreeMap<String, f64> =
        corpus.pages().map(|p| (p.to_string(), 0.0)).collect();

    let pages: Vec<&str> = corpus.pages().collect();
    let mut current = pages[rng.gen_range(0..pages.len())].to_string();
    debug!(start = %current, samples = config.samples, "sampling chain");

    for _ in 0..config.samples {
        if let Some(rank) = ranks.get_mut(&current) {
            *rank += weight;
        }

        let model = transition_model(corpus, &current, config.damping);
        let (targets, masses): (Vec<&String>, Vec<f64>) =
            model.iter().map(|(page, mass)| (page, *mass)).unzip();
        let draw = WeightedIndex::new(masses).expect("transition masses are positive");
        current = targets[draw.sample(rng)].clone();
    }

    Ok(ranks)
}
