// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Printing of sequence reports and run diagnostics.

use std::io::{self, Write};

pub use crate::output_diagnostic::{print_error, print_skipped, print_warning};

use crate::report::SequenceLine;
use crate::run::Report;

/// Write one `<id>: <tokens>` line per sequence.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[SequenceLine]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Print the report lines to stdout.
pub fn print_lines(lines: &[SequenceLine]) -> io::Result<()> {
    write_lines(&mut io::stdout().lock(), lines)
}

/// Print a warning for every file the run skipped or could not read.
pub fn print_diagnostics(report: &Report) {
    for warning in &report.warnings {
        print_warning(warning);
    }
    for skipped in &report.skipped {
        print_skipped(skipped);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
