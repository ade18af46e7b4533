// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the meowtest binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn meowtest() -> Command {
    Command::cargo_bin("meowtest").unwrap()
}

#[test]
fn full_suite_passes_and_exits_zero() {
    meowtest()
        .assert()
        .success()
        .stdout(predicate::str::contains("Testing use case 0"))
        .stdout(predicate::str::contains("Completed use case 5"))
        .stdout(predicate::str::contains("Number of failed test(s): 0"));
}

#[test]
fn trace_lines_bracket_every_case() {
    let output = meowtest().output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    for ordinal in 0..6 {
        assert!(stdout.contains(&format!("Testing use case {ordinal}")));
        assert!(stdout.contains(&format!("Completed use case {ordinal}")));
    }
    assert!(stdout.ends_with("Number of failed test(s): 0\n"));
}

#[test]
fn captured_output_never_leaks_to_the_real_channel() {
    meowtest()
        .assert()
        .success()
        .stdout(predicate::str::contains("Meow.").not())
        .stdout(predicate::str::contains("Frisky is a cat").not());
}

#[test]
fn case_filter_runs_a_subset_in_order() {
    meowtest()
        .args(["--case", "3", "--case", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Testing use case 3"))
        .stdout(predicate::str::contains("Testing use case 5"))
        .stdout(predicate::str::contains("Testing use case 0").not())
        .stdout(predicate::str::contains("Number of failed test(s): 0"));
}

#[test]
fn list_prints_cases_without_running_them() {
    meowtest()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("case 0: input 2130707444 -> status 0"))
        .stdout(predicate::str::contains("case 5: input 2147483647 -> status 0"))
        .stdout(predicate::str::contains("Testing use case").not());
}

#[test]
fn json_report_parses_and_tallies() {
    let output = meowtest().arg("--json").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 7); // six results plus the summary

    for line in &lines[..6] {
        let result: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(result["verdict"], "pass");
    }

    let summary: serde_json::Value = serde_json::from_str(lines[6]).unwrap();
    assert_eq!(summary["total"], 6);
    assert_eq!(summary["failures"], 0);
}
