//! Iterative estimator: bounded fixed-point relaxation of the PageRank
//! equation.
//!
//! # Algorithm
//!
//! ```text
//! PR(p) = (1 - d) / N + d * Σ PR(q) / L(q)   for each q → p
//! ```
//!
//! A dangling page (`L(q) == 0`) is treated as linking to every page, so it
//! contributes `d * PR(q) / N` to all pages — itself included. Each sweep
//! pushes rank from a frozen snapshot into a fresh vector of new ranks
//! (synchronous update), and iteration stops once every page's absolute
//! change is within the tolerance or the iteration cap is reached.
//!
//! The update operator is a contraction for damping in (0, 1), so the loop
//! terminates quickly in practice; it is nonetheless capped, and the
//! outcome carries a `converged` flag so callers can report
//! non-convergence instead of hanging on pathological input.

use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use crate::corpus::Corpus;
use crate::error::{LinkrankError, Result};
use crate::rank::{DEFAULT_DAMPING, check_damping};

/// Configuration for the iterative estimator.
#[derive(Debug, Clone, Copy)]
pub struct IterateConfig {
    /// Damping factor in (0, 1). Default: 0.85.
    pub damping: f64,
    /// Convergence threshold: stop when no page's rank changes by more than
    /// this between sweeps. Default: 0.001.
    pub tolerance: f64,
    /// Maximum number of sweeps. Default: 100.
    pub max_iterations: usize,
}

impl Default for IterateConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: 1e-3,
            max_iterations: 100,
        }
    }
}

/// Result of an iterative PageRank computation.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    /// Rank per page, one entry per corpus page, total mass 1.0.
    pub ranks: BTreeMap<String, f64>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Whether every page settled within the tolerance before the cap.
    /// When `false`, `ranks` holds the final sweep's values.
    pub converged: bool,
}

/// Estimate PageRank by synchronous fixed-point relaxation.
///
/// Ranks start uniform at `1/N` and are recomputed sweep by sweep from the
/// previous snapshot until every page's change is at most
/// `config.tolerance`, or `config.max_iterations` sweeps have run. The
/// update operator is a contraction for damping in (0, 1), so convergence
/// is expected in practice; the cap guards the pathological cases.
///
/// Deterministic: the same corpus and configuration always produce the same
/// outcome, independent of how the corpus was assembled.
///
/// # Errors
///
/// Fails fast with [`LinkrankError::EmptyCorpus`],
/// [`LinkrankError::InvalidDamping`], [`LinkrankError::InvalidTolerance`],
/// or [`LinkrankError::InvalidIterationCap`].
#[instrument(skip(corpus, config))]
pub fn iterate_pagerank(corpus: &Corpus, config: &IterateConfig) -> Result<RankOutcome> {
    if corpus.is_empty() {
        return Err(LinkrankError::EmptyCorpus);
    }
    check_damping(config.damping)?;
    if !(config.tolerance > 0.0) {
        return Err(LinkrankError::InvalidTolerance(config.tolerance));
    }
    if config.max_iterations == 0 {
        return Err(LinkrankError::InvalidIterationCap);
    }

    let n = corpus.page_count() as f64;
    let base = (1.0 - config.damping) / n;

    let mut ranks: BTreeMap<String, f64> =
        corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect();

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iterations {
        iterations += 1;

        // Every page starts the sweep with the teleportation base term.
        let mut next: BTreeMap<String, f64> =
            corpus.pages().map(|p| (p.to_string(), base)).collect();

        // Push each page's damped mass to its targets.
        for (page, links) in corpus.iter() {
            let rank = ranks[page];
            if links.is_empty() {
                // Dangling page: its mass flows uniformly to every page,
                // itself included.
                let share = config.damping * rank / n;
                for value in next.values_mut() {
                    *value += share;
                }
            } else {
                let share = config.damping * rank / links.len() as f64;
                for target in links {
                    if let Some(value) = next.get_mut(target) {
                        *value += share;
                    }
                }
            }
        }

        // Largest per-page change decides convergence.
        let delta = ranks
            .iter()
            .map(|(page, old)| (old - next[page]).abs())
            .fold(0.0_f64, f64::max);

        ranks = next;

        if delta <= config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(iterations, "iterative pagerank converged");
    } else {
        warn!(
            iterations,
            "iterative pagerank hit the iteration cap before converging"
        );
    }

    Ok(RankOutcome {
        ranks,
        iterations,
        converged,
    })
}
