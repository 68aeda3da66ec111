//! End-to-end tests for the `linkrank` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn linkrank() -> Command {
    Command::cargo_bin("linkrank").expect("binary builds")
}

fn write_two_cycle_corpus(dir: &Path) {
    fs::write(dir.join("a.html"), r#"<html><a href="b.html">b</a></html>"#)
        .expect("write a.html");
    fs::write(dir.join("b.html"), r#"<html><a href="a.html">a</a></html>"#)
        .expect("write b.html");
}

#[test]
fn missing_argument_is_a_usage_error() {
    linkrank()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_argument_is_a_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    linkrank()
        .arg(dir.path())
        .arg("surplus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn reports_both_estimators_for_a_valid_corpus() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_two_cycle_corpus(dir.path());

    linkrank()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)",
        ))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::is_match(r"  a\.html: 0\.\d{4}\n").expect("regex"))
        .stdout(predicate::str::is_match(r"  b\.html: 0\.\d{4}\n").expect("regex"));
}

#[test]
fn empty_corpus_directory_fails_with_a_message() {
    let dir = tempfile::tempdir().expect("tempdir");

    linkrank()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("corpus is empty"));
}

#[test]
fn missing_corpus_directory_fails_with_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");

    linkrank()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load corpus"));
}
