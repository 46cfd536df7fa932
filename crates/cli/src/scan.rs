// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Folder scanning for sequence file names.

use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use walkdir::WalkDir;

/// Pattern for `<id>.<4-digit frame>.<ext>` file names.
pub const DEFAULT_PATTERN: &str = r"\w+(\.{1}\d{4}\.{1})\w+";

/// Errors that stop a scan before any file name is read.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("folder {} doesn't exist or is not a directory", path.display())]
    InvalidFolder { path: PathBuf },

    #[error("invalid file name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Check once, up front, that `path` is an existing directory.
pub fn ensure_folder(path: &Path) -> Result<(), ScanError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ScanError::InvalidFolder {
            path: path.to_path_buf(),
        })
    }
}

/// File names found by a scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Bare file names matching the pattern, in walk order
    pub filenames: Vec<String>,

    /// Entries that could not be read; the walk carries on past them
    pub warnings: Vec<String>,
}

/// Recursive folder walker that keeps file names matching a pattern.
#[derive(Clone, Debug)]
pub struct Scanner {
    pattern: Regex,
    max_depth: Option<usize>,
}

impl Scanner {
    /// Compile a scanner for the given pattern.
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            max_depth: None,
        })
    }

    /// Limit how many directory levels below the root are visited.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether a bare file name is accepted by the pattern.
    pub fn matches(&self, filename: &str) -> bool {
        self.pattern.is_match(filename)
    }

    /// Walk `folder` and collect matching file names.
    pub fn scan(&self, folder: &Path) -> Result<ScanOutcome, ScanError> {
        ensure_folder(folder)?;

        let mut walker = WalkDir::new(folder).sort_by_file_name();
        if let Some(depth) = self.max_depth {
            // depth 0 is the root itself
            walker = walker.max_depth(depth.saturating_add(1));
        }

        let mut outcome = ScanOutcome::default();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    outcome.warnings.push(e.to_string());
                    continue;
                }
            };

            // links are not followed by the walk; keep those that resolve to a file
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                outcome.warnings.push(format!(
                    "skipping non UTF-8 file name: {}",
                    entry.path().display()
                ));
                continue;
            };

            if self.matches(name) {
                outcome.filenames.push(name.to_string());
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
