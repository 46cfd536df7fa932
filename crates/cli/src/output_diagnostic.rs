// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Fatal run errors (bad folder, bad pattern) go through `print_error`;
//! per-file problems found during a scan go through `print_warning` and
//! `print_skipped`. Provides ANSI color support with automatic terminal
//! detection.

use std::io::{self, IsTerminal, Write};

use crate::sequence::SequenceError;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
pub(crate) fn write_error<W: Write>(
    writer: &mut W,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
pub(crate) fn write_warning<W: Write>(
    writer: &mut W,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print a warning for a file left out of the report.
pub fn print_skipped(err: &SequenceError) {
    let is_tty = io::stderr().is_terminal();
    write_skipped(&mut io::stderr(), err, is_tty);
}

/// Write a skipped-file warning, leading with the file name.
pub(crate) fn write_skipped<W: Write>(writer: &mut W, err: &SequenceError, is_terminal: bool) {
    let reason = match err {
        SequenceError::MalformedFilename { .. } => "expected <id>.<frame>".to_string(),
        SequenceError::Parse { source, .. } => source.to_string(),
    };
    write_warning(
        writer,
        format_args!("skipped {}: {}", err.filename(), reason),
        is_terminal,
    );
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
