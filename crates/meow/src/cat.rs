// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The simulated `Cat` lifecycle.

use std::io::{self, Write};

/// A simulated cat with an age in years.
///
/// Ages are `i64` so that incrementing past `i32::MAX` widens instead of
/// wrapping; the harness's boundary cases rely on `2147483647 + 1` printing
/// as `2147483648`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cat {
    age: i64,
}

impl Cat {
    pub fn new(age: i64) -> Self {
        Self { age }
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn set_age(&mut self, age: i64) {
        self.age = age;
    }

    /// Print `Meow.` to the writer.
    pub fn meow<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Meow.")
    }
}

/// Walk Frisky through one lifecycle: construct, meow, report the age,
/// meow again, grow a year older, report again.
pub fn run_to<W: Write>(writer: &mut W, age: i64) -> io::Result<()> {
    write!(writer, "How old is Frisky? ")?;
    let mut frisky = Cat::new(age);
    frisky.meow(writer)?;
    writeln!(writer, "Frisky is a cat who is {} years old.", frisky.age())?;
    frisky.meow(writer)?;
    frisky.set_age(age + 1);
    writeln!(writer, "Now Frisky is {} years old.", frisky.age())?;
    Ok(())
}

/// Behavior-under-test entry point: writes the lifecycle transcript to the
/// process's standard output and returns a status code, 0 on success.
pub fn run(age: i64) -> i32 {
    let mut out = io::stdout().lock();
    match run_to(&mut out, age).and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
#[path = "cat_tests.rs"]
mod tests;
