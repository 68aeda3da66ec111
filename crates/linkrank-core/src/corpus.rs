//! Corpus data model: pages and their outbound links.
//!
//! # Overview
//!
//! A [`Corpus`] maps every page identifier to the set of **other** corpus
//! pages it links to. The constructor normalizes raw link data so the rest
//! of the crate can rely on two invariants:
//!
//! 1. every linked page is itself a key of the corpus (links to documents
//!    outside the collection are dropped), and
//! 2. no page links to itself (self-links are inert for ranking and are
//!    removed up front rather than special-cased in the estimators).
//!
//! `BTreeMap`/`BTreeSet` keep pages in identifier order, so iteration — and
//! therefore the iterative estimator — is deterministic regardless of the
//! order pages were discovered on disk.

use std::collections::{BTreeMap, BTreeSet};

/// An immutable collection of pages and their intra-corpus links.
///
/// Built once by [`Corpus::from_links`] (usually via [`crate::crawl`]) and
/// consumed read-only by both estimators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build a corpus from raw page → link-set data.
    ///
    /// The key set of `pages` defines the corpus. Each link set is filtered
    /// to drop self-links and links whose target is not a corpus page.
    #[must_use]
    pub fn from_links(pages: BTreeMap<String, BTreeSet<String>>) -> Self {
        let keys: BTreeSet<String> = pages.keys().cloned().collect();

        let links = pages
            .into_iter()
            .map(|(page, targets)| {
                let resolved: BTreeSet<String> = targets
                    .into_iter()
                    .filter(|target| *target != page && keys.contains(target))
                    .collect();
                (page, resolved)
            })
            .collect();

        Self { links }
    }

    /// Number of pages in the corpus.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the corpus has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns `true` if `page` is a corpus page.
    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Page identifiers in sorted order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Outbound links of `page`, or `None` if `page` is not in the corpus.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    /// Iterate over `(page, outbound links)` pairs in sorted page order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.links.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pages: &[(&str, &[&str])]) -> BTreeMap<String, BTreeSet<String>> {
        pages
            .iter()
            .map(|(page, targets)| {
                (
                    (*page).to_string(),
                    targets.iter().map(|t| (*t).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn self_links_are_dropped() {
        let corpus = Corpus::from_links(raw(&[("a", &["a", "b"]), ("b", &[])]));
        let links = corpus.links("a").expect("a is a corpus page");
        assert_eq!(links.len(), 1);
        assert!(links.contains("b"));
    }

    #[test]
    fn out_of_corpus_links_are_dropped() {
        let corpus = Corpus::from_links(raw(&[("a", &["b", "https://example.com"]), ("b", &["a"])]));
        let links = corpus.links("a").expect("a is a corpus page");
        assert_eq!(links.len(), 1, "external target should be filtered: {links:?}");
    }

    #[test]
    fn normalization_can_leave_a_page_dangling() {
        // b only links outside the corpus, so it ends up with no links.
        let corpus = Corpus::from_links(raw(&[("a", &["b"]), ("b", &["elsewhere.html"])]));
        assert!(corpus.links("b").expect("b is a corpus page").is_empty());
    }

    #[test]
    fn pages_iterate_in_identifier_order() {
        let corpus = Corpus::from_links(raw(&[("c", &[]), ("a", &[]), ("b", &[])]));
        let order: Vec<&str> = corpus.pages().collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn accessors_on_empty_corpus() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.page_count(), 0);
        assert!(!corpus.contains("a"));
        assert!(corpus.links("a").is_none());
    }

    #[test]
    fn construction_is_insertion_order_independent() {
        let forward = Corpus::from_links(raw(&[("a", &["b"]), ("b", &["a"]), ("c", &["a"])]));
        let reversed = Corpus::from_links(raw(&[("c", &["a"]), ("b", &["a"]), ("a", &["b"])]));
        assert_eq!(forward, reversed);
    }
}
