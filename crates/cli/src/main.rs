// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame range reporter binary entry point.

use clap::Parser;

use framerange::cli::Cli;
use framerange::output::{print_diagnostics, print_error, print_lines};
use framerange::run::run;

fn main() {
    let cli = Cli::parse();

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        print_diagnostics(&report);
    }

    if let Err(e) = print_lines(&report.lines) {
        // Closed pipe (e.g. `| head`) is not a failure
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            print_error(format_args!("failed to write report: {}", e));
            std::process::exit(1);
        }
    }
}
