// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-output test harness for the Frisky cat simulator.
//!
//! Runs a fixed suite of test cases against an opaque behavior — a function
//! taking one signed integer and returning a status code, writing whatever
//! it likes to standard output along the way. Each case's captured output
//! and returned status are compared byte-for-byte against golden
//! expectations; failures are recorded and tallied, never allowed to abort
//! the rest of the suite.

pub mod case;
pub mod diff;
pub mod runner;
pub mod suite;

pub use case::{RunResult, SuiteSummary, TestCase, Verdict};
pub use runner::{run_case, run_suite, Behavior};
