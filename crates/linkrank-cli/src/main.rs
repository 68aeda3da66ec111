#![forbid(unsafe_code)]

mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use linkrank_core::{IterateConfig, SampleConfig, crawl, iterate_pagerank, sample_pagerank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "linkrank: PageRank over a directory of HTML documents",
    long_about = None
)]
struct Cli {
    /// Directory containing the corpus of .html documents.
    corpus: PathBuf,
}

/// Logging goes to stderr so report output on stdout stays clean;
/// `RUST_LOG` controls the filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;
    info!(pages = corpus.page_count(), "corpus loaded");

    let sample_config = SampleConfig::default();
    let mut rng = StdRng::from_entropy();
    let sampled = sample_pagerank(&corpus, &sample_config, &mut rng)
        .context("sampling estimator failed")?;

    let outcome = iterate_pagerank(&corpus, &IterateConfig::default())
        .context("iterative estimator failed")?;
    if !outcome.converged {
        eprintln!(
            "warning: iteration stopped after {} sweeps without converging",
            outcome.iterations
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::render_sampling(&sampled, sample_config.samples, &mut out)?;
    report::render_iteration(&outcome.ranks, &mut out)?;

    Ok(())
}
