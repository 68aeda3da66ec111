#![forbid(unsafe_code)]
//! Corpus model and PageRank estimators for linkrank.
//!
//! # Overview
//!
//! A [`Corpus`] maps each page of a closed document collection to the set of
//! other corpus pages it links to. Two independent estimators approximate
//! the stationary distribution of the random-surfer Markov chain over that
//! corpus:
//!
//! - [`sample_pagerank`] simulates the chain for a fixed number of steps and
//!   reports empirical visit frequencies.
//! - [`iterate_pagerank`] solves the PageRank fixed-point equation by
//!   bounded synchronous relaxation.
//!
//! Both consume the corpus read-only and produce one rank per page, with
//! total rank mass 1.0.
//!
//! # Conventions
//!
//! - **Errors**: fallible operations return [`Result`] with a typed
//!   [`LinkrankError`]; precondition violations inside the transition model
//!   are programming errors and panic.
//! - **Logging**: `tracing` macros (`debug!`, `warn!`).

pub mod corpus;
pub mod crawl;
pub mod error;
pub mod rank;

pub use corpus::Corpus;
pub use crawl::crawl;
pub use error::{LinkrankError, Result};
pub use rank::{
    DEFAULT_DAMPING, DEFAULT_SAMPLES, IterateConfig, RankOutcome, SampleConfig, iterate_pagerank,
    sample_pagerank, transition_model,
};
