// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case execution: output capture, failure isolation, comparison.

use crate::case::{RunResult, SuiteSummary, TestCase};
use crate::diff::render_diff;
use meowtest_capture::{CaptureError, CaptureSession};
use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

/// The behavior under test: takes the case's input, may write to standard
/// output, returns a status code. Opaque beyond that.
pub type Behavior = fn(i64) -> i32;

/// Run one case against `behavior` and produce its [`RunResult`].
///
/// Trace lines and diagnostics go to `trace`, which must be the real
/// output channel, never the capture sink. The capture session is closed
/// before anything is compared or printed, on every path: a panic out of
/// the behavior is caught, converted into a failed result, and leaves the
/// channel fully restored for the next case.
pub fn run_case<W: Write>(
    trace: &mut W,
    case: &TestCase,
    behavior: Behavior,
) -> io::Result<RunResult> {
    // Flushed immediately so progress is visible even if the behavior
    // hangs or crashes mid-case.
    writeln!(trace, "Testing use case {}", case.ordinal)?;
    trace.flush()?;

    let result = match CaptureSession::begin() {
        Ok(session) => {
            let invoked = panic::catch_unwind(AssertUnwindSafe(|| behavior(case.input)));
            // Restore the real channel before any comparison or logging.
            let captured = session.finish();
            evaluate(case, invoked, captured)
        }
        Err(err) => RunResult::fail(
            case.ordinal,
            String::new(),
            None,
            format!("capture failed: {err}"),
        ),
    };

    if let Some(diagnostic) = &result.diagnostic {
        writeln!(trace, "Test case {} failed: {}", case.ordinal, diagnostic)?;
    }
    writeln!(trace, "Completed use case {}", case.ordinal)?;
    trace.flush()?;

    Ok(result)
}

/// Run `cases` in declared order against `behavior`, printing per-case
/// traces to `trace`. Returns every result plus the aggregate tally; no
/// single case's failure stops the rest.
pub fn run_suite<W: Write>(
    trace: &mut W,
    cases: &[TestCase],
    behavior: Behavior,
) -> io::Result<(Vec<RunResult>, SuiteSummary)> {
    let mut summary = SuiteSummary::default();
    let mut results = Vec::with_capacity(cases.len());
    for case in cases {
        let result = run_case(trace, case, behavior)?;
        summary.record(&result);
        results.push(result);
    }
    Ok((results, summary))
}

fn evaluate(
    case: &TestCase,
    invoked: std::thread::Result<i32>,
    captured: Result<String, CaptureError>,
) -> RunResult {
    match (invoked, captured) {
        (Err(payload), captured) => RunResult::fail(
            case.ordinal,
            captured.unwrap_or_default(),
            None,
            format!("panicked: {}", panic_message(payload.as_ref())),
        ),
        (Ok(status), Err(err)) => RunResult::fail(
            case.ordinal,
            String::new(),
            Some(status),
            format!("capture failed: {err}"),
        ),
        (Ok(status), Ok(output)) => compare(case, output, status),
    }
}

fn compare(case: &TestCase, output: String, status: i32) -> RunResult {
    let mut problems = Vec::new();
    if status != case.expected_status {
        problems.push(format!(
            "Status mismatch: expected {}, actual {}",
            case.expected_status, status
        ));
    }
    if output != case.expected_output {
        problems.push(format!(
            "Output mismatch\nActual Output: {}\nExpected Output: {}\n{}",
            output,
            case.expected_output,
            render_diff(&case.expected_output, &output)
        ));
    }

    if problems.is_empty() {
        RunResult::pass(case.ordinal, output, status)
    } else {
        RunResult::fail(case.ordinal, output, Some(status), problems.join("\n"))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
