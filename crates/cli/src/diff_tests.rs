// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn identical_texts_produce_no_hunks() {
    assert_eq!(render_diff("Meow.\n", "Meow.\n"), "");
}

#[test]
fn mismatch_shows_both_sides() {
    let diff = render_diff("Frisky is 100 years old.\n", "Frisky is 99 years old.\n");
    assert!(diff.contains("--- expected"));
    assert!(diff.contains("+++ actual"));
    assert!(diff.contains("-Frisky is 100 years old."));
    assert!(diff.contains("+Frisky is 99 years old."));
}

#[test]
fn extra_line_is_an_insertion() {
    let diff = render_diff("Meow.\n", "Meow.\nI should not enter here\n");
    assert!(diff.contains("+I should not enter here"));
}
