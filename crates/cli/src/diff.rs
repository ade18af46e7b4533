// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unified-diff rendering for mismatch diagnostics.

use similar::TextDiff;

/// Render a unified diff of expected vs. actual output.
///
/// Returns an empty string when the two texts are identical.
pub fn render_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
