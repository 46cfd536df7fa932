// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::scan::DEFAULT_PATTERN;

/// Animated sequence frame ranges retriever
#[derive(Parser, Clone, Debug)]
#[command(
    name = "framerange",
    version,
    about = "Animated sequence frame ranges retriever"
)]
pub struct Cli {
    /// Folder to scan for sequence files
    #[arg(short = 'f', long = "folder-path", alias = "folder_path", value_name = "PATH")]
    pub folder_path: PathBuf,

    /// Regex a file name must match to be read as a sequence frame
    #[arg(
        short = 'p',
        long,
        env = "FRAMERANGE_PATTERN",
        default_value = DEFAULT_PATTERN,
        value_name = "REGEX"
    )]
    pub pattern: String,

    /// Maximum folder depth below PATH to descend into (0 = PATH only)
    #[arg(long, env = "FRAMERANGE_MAX_DEPTH", value_name = "N")]
    pub max_depth: Option<usize>,

    /// Report skipped files and unreadable entries on stderr
    #[arg(short = 'v', long, env = "FRAMERANGE_VERBOSE")]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
