// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness entry point: owns the golden suite and drives the runner.

use clap::Parser;
use meowtest::case::{exit_codes, SuiteSummary};
use meowtest::runner::run_suite;
use meowtest::suite::golden_cases;
use std::io::{self, Write};
use std::process::ExitCode;

/// Golden-output harness for the Frisky cat simulator
#[derive(Parser, Debug)]
#[command(name = "meowtest")]
#[command(about = "Run the fixed golden-output suite against the cat simulator")]
struct Cli {
    /// Run only the given case ordinals (repeatable), preserving suite order
    #[arg(short, long = "case", value_name = "N")]
    case: Vec<usize>,

    /// List the suite's cases without running them
    #[arg(long)]
    list: bool,

    /// Emit per-case results and the summary as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("meowtest: {err}");
            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}

fn run(cli: &Cli) -> io::Result<ExitCode> {
    let cases: Vec<_> = if cli.case.is_empty() {
        golden_cases()
    } else {
        golden_cases()
            .into_iter()
            .filter(|c| cli.case.contains(&c.ordinal))
            .collect()
    };

    if cli.list {
        let mut out = io::stdout().lock();
        for case in &cases {
            writeln!(
                out,
                "case {}: input {} -> status {}",
                case.ordinal, case.input, case.expected_status
            )?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    if cli.json {
        // Text traces are suppressed; stdout carries only the report.
        let mut sink = io::sink();
        let (results, summary) = run_suite(&mut sink, &cases, meow::run)?;
        let mut out = io::stdout().lock();
        for result in &results {
            writeln!(out, "{}", serde_json::to_string(result)?)?;
        }
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
        out.flush()?;
        return Ok(summary_exit(summary));
    }

    let mut out = io::stdout().lock();
    let (_, summary) = run_suite(&mut out, &cases, meow::run)?;
    writeln!(out, "Number of failed test(s): {}", summary.failures)?;
    out.flush()?;
    Ok(summary_exit(summary))
}

fn summary_exit(summary: SuiteSummary) -> ExitCode {
    ExitCode::from(summary.exit_code() as u8)
}
