// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped standard-output capture for golden-output testing.
//!
//! This crate provides [`CaptureSession`], a scoped redirection of the
//! process's stdout file descriptor into an observable sink. Open a session
//! before invoking the behavior whose output you want to inspect, and close
//! it with [`CaptureSession::finish`] to get everything that was written as
//! a single string. The real channel is restored on every exit path,
//! including panics out of the observed behavior.

mod session;

pub use session::{CaptureError, CaptureSession};
