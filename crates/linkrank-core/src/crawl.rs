//! Corpus loading from a directory of HTML documents.
//!
//! Scans a directory (non-recursive) for `.html` files, extracts the
//! `href` target of every anchor tag, and builds a normalized [`Corpus`]
//! keyed by filename. Self-links and links to documents outside the
//! directory are removed by [`Corpus::from_links`].

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::corpus::Corpus;
use crate::error::{LinkrankError, Result};

/// Anchor-tag `href` extractor. Attributes before `href` are skipped;
/// anything after the quoted value is ignored.
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("href pattern is valid")
});

/// Load a [`Corpus`] from a directory of `.html` documents.
///
/// Non-HTML files are ignored. A directory with no HTML files yields an
/// empty corpus; the estimators reject that later as [`LinkrankError::EmptyCorpus`].
///
/// # Errors
///
/// Returns [`LinkrankError::Io`] if the directory or one of its documents
/// cannot be read.
#[instrument]
pub fn crawl(dir: &Path) -> Result<Corpus> {
    let entries = fs::read_dir(dir).map_err(|source| LinkrankError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in entries {
        let entry = entry.map_err(|source| LinkrankError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".html") || !path.is_file() {
            continue;
        }

        let contents = fs::read_to_string(&path).map_err(|source| LinkrankError::Io {
            path: path.clone(),
            source,
        })?;

        let links: BTreeSet<String> = HREF_RE
            .captures_iter(&contents)
            .map(|captures| captures[1].to_string())
            .collect();

        debug!(page = name, links = links.len(), "extracted links");
        pages.insert(name.to_string(), links);
    }

    if pages.is_empty() {
        warn!(dir = %dir.display(), "no .html pages found");
    }

    Ok(Corpus::from_links(pages))
}
