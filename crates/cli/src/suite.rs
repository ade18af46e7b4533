// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed golden suite for the cat simulator.
//!
//! Expected outputs are spelled out literally: they are the contract the
//! behavior is held to, not something derived from it. Inputs probe the
//! interesting points of the age range, including the `i32` boundary.

use crate::case::TestCase;

const GOLDEN: [(i64, &str); 6] = [
    (
        2130707444,
        "How old is Frisky? Meow.\nFrisky is a cat who is 2130707444 years old.\nMeow.\nNow Frisky is 2130707445 years old.\n",
    ),
    (
        501,
        "How old is Frisky? Meow.\nFrisky is a cat who is 501 years old.\nMeow.\nNow Frisky is 502 years old.\n",
    ),
    (
        -1,
        "How old is Frisky? Meow.\nFrisky is a cat who is -1 years old.\nMeow.\nNow Frisky is 0 years old.\n",
    ),
    (
        99,
        "How old is Frisky? Meow.\nFrisky is a cat who is 99 years old.\nMeow.\nNow Frisky is 100 years old.\n",
    ),
    (
        268435455,
        "How old is Frisky? Meow.\nFrisky is a cat who is 268435455 years old.\nMeow.\nNow Frisky is 268435456 years old.\n",
    ),
    (
        2147483647,
        "How old is Frisky? Meow.\nFrisky is a cat who is 2147483647 years old.\nMeow.\nNow Frisky is 2147483648 years old.\n",
    ),
];

/// The golden cases, in execution order.
pub fn golden_cases() -> Vec<TestCase> {
    GOLDEN
        .iter()
        .enumerate()
        .map(|(ordinal, &(input, expected_output))| TestCase {
            ordinal,
            input,
            expected_output: expected_output.to_string(),
            expected_status: 0,
        })
        .collect()
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
