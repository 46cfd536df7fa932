// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end pipeline: scan a folder, group frames, collapse ranges.

use std::path::Path;

use thiserror::Error;

use crate::cli::Cli;
use crate::report::{format_sequences, SequenceLine};
use crate::scan::{ensure_folder, ScanError, Scanner};
use crate::sequence::{extract, SequenceError};

/// Fatal errors that end a run before anything is printed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Everything a run produced.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// One line per sequence, in identifier order
    pub lines: Vec<SequenceLine>,

    /// Matching files whose names could not be read as frames
    pub skipped: Vec<SequenceError>,

    /// Folder entries the walk could not read
    pub warnings: Vec<String>,
}

/// Run the pipeline with options from the command line.
pub fn run(cli: &Cli) -> Result<Report, RunError> {
    ensure_folder(&cli.folder_path)?;
    let scanner = Scanner::new(&cli.pattern)?.with_max_depth(cli.max_depth);
    run_with(&scanner, &cli.folder_path)
}

/// Run the pipeline with a prepared scanner.
pub fn run_with(scanner: &Scanner, folder: &Path) -> Result<Report, RunError> {
    let outcome = scanner.scan(folder)?;
    let extraction = extract(&outcome.filenames);

    Ok(Report {
        lines: format_sequences(&extraction.sequences),
        skipped: extraction.rejected,
        warnings: outcome.warnings,
    })
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
