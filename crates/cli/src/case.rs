// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case declarations, per-case results, and the suite tally.

use serde::Serialize;

/// Exit codes for the harness binary.
pub mod exit_codes {
    /// Every case passed.
    pub const SUCCESS: i32 = 0;
    /// At least one case failed (or the harness itself hit an I/O error).
    pub const FAILURE: i32 = 1;
}

/// One golden test case: an input for the behavior under test and the
/// exact output and status it is expected to produce.
///
/// Cases are built once at startup and never mutated; the ordinal fixes
/// execution order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub ordinal: usize,
    pub input: i64,
    pub expected_output: String,
    pub expected_status: i32,
}

/// Pass/fail outcome of one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Everything observed while running one case.
///
/// `status` is `None` when the behavior panicked before returning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub ordinal: usize,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl RunResult {
    pub fn pass(ordinal: usize, output: String, status: i32) -> Self {
        Self {
            ordinal,
            output,
            status: Some(status),
            verdict: Verdict::Pass,
            diagnostic: None,
        }
    }

    pub fn fail(
        ordinal: usize,
        output: String,
        status: Option<i32>,
        diagnostic: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            output,
            status,
            verdict: Verdict::Fail,
            diagnostic: Some(diagnostic.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}

/// Aggregate pass/fail tally for one suite run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SuiteSummary {
    pub total: usize,
    pub failures: usize,
}

impl SuiteSummary {
    pub fn record(&mut self, result: &RunResult) {
        self.total += 1;
        if !result.passed() {
            self.failures += 1;
        }
    }

    /// Process exit status: 0 when every case passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failures == 0 {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
