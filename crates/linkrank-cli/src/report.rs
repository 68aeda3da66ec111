//! Rank report rendering.
//!
//! Both estimators report the same shape: a header line followed by one
//! `  page: rank` line per page, ranks to four decimal places, pages in
//! identifier order (the rank mapping is already sorted).

use std::collections::BTreeMap;
use std::io::{self, Write};

/// Render the sampling estimator's report.
pub fn render_sampling(
    ranks: &BTreeMap<String, f64>,
    samples: usize,
    w: &mut dyn Write,
) -> io::Result<()> {
    writeln!(w, "PageRank Results from Sampling (n = {samples})")?;
    render_ranks(ranks, w)
}

/// Render the iterative estimator's report.
pub fn render_iteration(ranks: &BTreeMap<String, f64>, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "PageRank Results from Iteration")?;
    render_ranks(ranks, w)
}

fn render_ranks(ranks: &BTreeMap<String, f64>, w: &mut dyn Write) -> io::Result<()> {
    for (page, rank) in ranks {
        writeln!(w, "  {page}: {rank:.4}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs
            .iter()
            .map(|(page, rank)| ((*page).to_string(), *rank))
            .collect()
    }

    #[test]
    fn sampling_report_has_header_and_sorted_rows() {
        let ranks = ranks(&[("b.html", 0.25), ("a.html", 0.75)]);
        let mut out = Vec::new();

        render_sampling(&ranks, 10_000, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "PageRank Results from Sampling (n = 10000)");
        assert_eq!(lines[1], "  a.html: 0.7500");
        assert_eq!(lines[2], "  b.html: 0.2500");
    }

    #[test]
    fn iteration_report_has_header() {
        let ranks = ranks(&[("a.html", 1.0)]);
        let mut out = Vec::new();

        render_iteration(&ranks, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("PageRank Results from Iteration\n"));
        assert!(rendered.contains("  a.html: 1.0000"));
    }

    #[test]
    fn ranks_are_formatted_to_four_decimals() {
        let ranks = ranks(&[("a.html", 0.123_456_7)]);
        let mut out = Vec::new();

        render_iteration(&ranks, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("0.1235"), "rounded to 4 places: {rendered}");
    }
}
