//! PageRank estimators.
//!
//! Three layers, leaves first:
//!
//! - [`transition_model`] — one random-surfer step as a probability
//!   distribution over all corpus pages.
//! - [`sample_pagerank`] — drives a Markov chain over the transition model
//!   and reports empirical visit frequencies.
//! - [`iterate_pagerank`] — solves the PageRank fixed-point equation by
//!   bounded synchronous relaxation.

pub mod iterate;
pub mod sample;
pub mod transition;

pub use iterate::{IterateConfig, RankOutcome, iterate_pagerank};
pub use sample::{SampleConfig, sample_pagerank};
pub use transition::transition_model;

use crate::error::{LinkrankError, Result};

/// Conventional damping factor: probability that the surfer follows an
/// outbound link instead of jumping to a uniformly random page.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default Markov-chain length for the sampling estimator.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Reject damping factors outside the open interval (0, 1).
pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(LinkrankError::InvalidDamping(damping))
    }
}
