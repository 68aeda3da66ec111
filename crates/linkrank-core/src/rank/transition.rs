//! One random-surfer step as a distribution over the corpus.

use std::collections::BTreeMap;

use crate::corpus::Corpus;

/// Probability distribution over which page a random surfer visits next,
/// given the current `page`.
///
/// With probability `damping` the surfer follows one of `page`'s outbound
/// links (uniformly among them); with probability `1 - damping` it jumps to
/// a uniformly random corpus page. The two contributions are additive, so a
/// linked page receives `(1 - damping) / N + damping / L` and every other
/// page receives `(1 - damping) / N`.
///
/// A dangling page (no outbound links) is treated as linking to every page,
/// yielding the exact uniform distribution `1 / N`. This keeps rank mass
/// from leaking out of the chain.
///
/// The result has exactly one entry per corpus page and sums to 1.0 up to
/// floating-point rounding.
///
/// # Panics
///
/// Panics if `page` is not a corpus key or `damping` lies outside (0, 1).
/// Both are programming errors on the caller's side; the estimator entry
/// points validate their configuration before stepping the model.
#[must_use]
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> BTreeMap<String, f64> {
    assert!(
        damping > 0.0 && damping < 1.0,
        "damping factor must be in (0, 1), got {damping}"
    );
    let Some(links) = corpus.links(page) else {
        panic!("page {page:?} is not in the corpus");
    };

    let n = corpus.page_count() as f64;

    if links.is_empty() {
        return corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect();
    }

    let base = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    corpus
        .pages()
        .map(|p| {
            let mass = if links.contains(p) { base + follow } else { base };
            (p.to_string(), mass)
        })
        .collect()
}
