// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped redirection of the stdout file descriptor.

use nix::unistd::{close, dup, dup2};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::os::fd::{AsRawFd, RawFd};
use thiserror::Error;

/// Errors from installing, restoring, or draining a capture sink.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to create capture sink: {0}")]
    Sink(#[source] io::Error),
    #[error("failed to redirect stdout: {0}")]
    Redirect(#[source] nix::Error),
    #[error("failed to restore stdout: {0}")]
    Restore(#[source] nix::Error),
    #[error("failed to read captured output: {0}")]
    Read(#[source] io::Error),
}

/// One scoped redirection of the process's standard output.
///
/// While a session is open, everything written to the stdout descriptor
/// lands in a temporary-file sink instead of the real channel. At most one
/// session should be active at a time; the harness runs them strictly
/// sequentially.
///
/// [`CaptureSession::finish`] restores the saved descriptor and returns the
/// sink contents. `Drop` restores it on the panic path, so a crashing
/// behavior cannot leak redirection state into later output.
pub struct CaptureSession {
    saved: RawFd,
    sink: File,
    restored: bool,
}

impl CaptureSession {
    /// Redirect stdout into a fresh sink.
    ///
    /// On any partial failure the original channel is left untouched.
    pub fn begin() -> Result<Self, CaptureError> {
        let sink = tempfile::tempfile().map_err(CaptureError::Sink)?;
        // Pending buffered writes belong to the real channel, not the sink.
        io::stdout().flush().map_err(CaptureError::Sink)?;

        let stdout_fd = io::stdout().as_raw_fd();
        let saved = dup(stdout_fd).map_err(CaptureError::Redirect)?;
        if let Err(err) = dup2(sink.as_raw_fd(), stdout_fd) {
            let _ = close(saved);
            return Err(CaptureError::Redirect(err));
        }

        Ok(Self {
            saved,
            sink,
            restored: false,
        })
    }

    /// Restore the real channel and return everything written during the
    /// session, newlines verbatim.
    pub fn finish(mut self) -> Result<String, CaptureError> {
        self.restore().map_err(CaptureError::Restore)?;

        let mut text = String::new();
        self.sink
            .seek(SeekFrom::Start(0))
            .map_err(CaptureError::Read)?;
        self.sink
            .read_to_string(&mut text)
            .map_err(CaptureError::Read)?;
        Ok(text)
    }

    /// Put the saved descriptor back. Safe to call at most once; `restored`
    /// guards the Drop backstop against a double swap.
    fn restore(&mut self) -> nix::Result<()> {
        if self.restored {
            return Ok(());
        }
        // Buffered writes from the session window must reach the sink
        // before the descriptor swap, or they would leak onto the real
        // channel afterwards.
        let _ = io::stdout().flush();

        let stdout_fd = io::stdout().as_raw_fd();
        dup2(self.saved, stdout_fd)?;
        self.restored = true;
        close(self.saved)?;
        Ok(())
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        // Backstop for the panic path; `finish` is the normal exit.
        let _ = self.restore();
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
