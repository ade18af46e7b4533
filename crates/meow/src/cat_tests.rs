// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

fn transcript(age: i64) -> String {
    let mut buf = Vec::new();
    run_to(&mut buf, age).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn cat_lifecycle() {
    let mut frisky = Cat::new(5);
    assert_eq!(frisky.age(), 5);

    frisky.set_age(6);
    assert_eq!(frisky.age(), 6);
}

#[test]
fn clones_are_independent() {
    let mut original = Cat::new(3);
    let copy = original.clone();

    original.set_age(4);
    assert_eq!(original.age(), 4);
    assert_eq!(copy.age(), 3);
}

#[test]
fn meow_prints_one_line() {
    let mut buf = Vec::new();
    Cat::new(1).meow(&mut buf).unwrap();
    assert_eq!(buf, b"Meow.\n");
}

#[test]
fn transcript_for_age_99() {
    assert_eq!(
        transcript(99),
        "How old is Frisky? Meow.\n\
         Frisky is a cat who is 99 years old.\n\
         Meow.\n\
         Now Frisky is 100 years old.\n"
    );
}

#[test]
fn transcript_widens_past_i32_max() {
    let text = transcript(2147483647);
    assert!(text.contains("Frisky is a cat who is 2147483647 years old.\n"));
    assert!(text.ends_with("Now Frisky is 2147483648 years old.\n"));
}

#[test]
fn transcript_for_negative_age() {
    let text = transcript(-1);
    assert!(text.contains("Frisky is a cat who is -1 years old.\n"));
    assert!(text.ends_with("Now Frisky is 0 years old.\n"));
}
