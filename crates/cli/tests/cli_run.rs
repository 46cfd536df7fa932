// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the `framerange` binary.

mod common;

use assert_cmd::Command;
use common::job_folder;
use predicates::prelude::*;

fn framerange() -> Command {
    let mut cmd = Command::cargo_bin("framerange").unwrap();
    cmd.env_remove("FRAMERANGE_PATTERN")
        .env_remove("FRAMERANGE_MAX_DEPTH")
        .env_remove("FRAMERANGE_VERBOSE");
    cmd
}

#[test]
fn test_prints_one_line_per_sequence() {
    let job = job_folder(&["c.1009.jpg", "c.1003.jpg", "t.1003.jpg", "t.1002.jpg"]);

    framerange()
        .args(["-f", job.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("c: 1003, 1009\nt: 1002-1003\n")
        .stderr("");
}

#[test]
fn test_zero_padding_is_preserved() {
    let job = job_folder(&["a.0001.png", "a.0002.png", "a.0003.png", "a.0005.png"]);

    framerange()
        .args(["--folder-path", job.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("a: 0001-0003, 0005\n");
}

#[test]
fn test_missing_folder_exits_nonzero() {
    let job = job_folder(&[]);
    let missing = job.path().join("no_such_job");

    framerange()
        .args(["-f", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: folder"))
        .stderr(predicate::str::contains("no_such_job"));
}

#[test]
fn test_missing_folder_argument_is_usage_error() {
    framerange()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--folder-path"));
}

#[test]
fn test_skipped_files_are_silent_by_default() {
    let job = job_folder(&["c.1003.jpg", "foo.bar.1003.jpg"]);

    framerange()
        .args(["-f", job.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("c: 1003\n")
        .stderr("");
}

#[test]
fn test_verbose_reports_skipped_files() {
    let job = job_folder(&["c.1003.jpg", "foo.bar.1003.jpg"]);

    framerange()
        .args(["-f", job.path().to_str().unwrap(), "--verbose"])
        .assert()
        .success()
        .stdout("c: 1003\n")
        .stderr(predicate::str::contains("Warning: skipped"))
        .stderr(predicate::str::contains("foo.bar.1003.jpg"));
}

#[test]
fn test_pattern_from_env() {
    let job = job_folder(&["a.1.exr", "a.2.exr", "b.0001.jpg"]);

    framerange()
        .env("FRAMERANGE_PATTERN", r"^\w+\.\d+\.exr$")
        .args(["-f", job.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("a: 1-2\n");
}

#[test]
fn test_invalid_pattern_exits_nonzero() {
    let job = job_folder(&[]);

    framerange()
        .args(["-f", job.path().to_str().unwrap(), "-p", "("])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid file name pattern"));
}

#[test]
fn test_empty_folder_prints_nothing() {
    let job = job_folder(&[]);

    framerange()
        .args(["-f", job.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_max_depth_limits_recursion() {
    let job = job_folder(&["c.1003.jpg", "sub/c.1004.jpg"]);
    let folder = job.path().to_str().unwrap();

    framerange()
        .args(["-f", folder])
        .assert()
        .success()
        .stdout("c: 1003-1004\n");

    framerange()
        .args(["-f", folder, "--max-depth", "0"])
        .assert()
        .success()
        .stdout("c: 1003\n");
}
