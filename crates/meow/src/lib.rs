// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behaviors exercised by the meowtest harness.
//!
//! The harness treats these as opaque collaborators: a function that takes
//! one signed integer, may write text to standard output, and returns a
//! status code. This crate supplies two of them — the `Cat` lifecycle
//! walkthrough ([`run`]) and a recursive [`factorial`].

mod cat;
mod fact;

pub use cat::{run, run_to, Cat};
pub use fact::factorial;
