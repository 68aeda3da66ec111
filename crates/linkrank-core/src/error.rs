//! Typed errors for corpus loading and rank estimation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the corpus loader and the rank estimators.
#[derive(Debug, Error)]
pub enum LinkrankError {
    /// Reading the corpus directory or one of its documents failed.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The corpus has no pages, so neither estimator can run.
    #[error("corpus is empty: no pages to rank")]
    EmptyCorpus,

    /// Damping factor outside the open interval (0, 1).
    #[error("damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),

    /// Sample count of zero.
    #[error("sample count must be positive")]
    InvalidSampleCount,

    /// Non-positive convergence tolerance.
    #[error("convergence tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    /// Iteration cap of zero.
    #[error("iteration cap must be positive")]
    InvalidIterationCap,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LinkrankError>;
