// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame range reporting for image sequences.
//!
//! Scans a folder for files named like `c.1003.jpg`, groups the frame
//! numbers by sequence identifier and prints each sequence's frames collapsed
//! into contiguous ranges:
//!
//! ```text
//! c: 1003, 1009
//! t: 1002-1003
//! ```
//!
//! The core is usable without touching the filesystem:
//!
//! ```
//! use framerange::report::format_sequences;
//! use framerange::sequence::extract;
//!
//! let extraction = extract(["c.1009.jpg", "c.1003.jpg", "t.1003.jpg", "t.1002.jpg"]);
//! let lines: Vec<String> = format_sequences(&extraction.sequences)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(lines, ["c: 1003, 1009", "t: 1002-1003"]);
//! ```

pub mod cli;
pub mod frame;
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod range;
pub mod report;
pub mod run;
pub mod scan;
pub mod sequence;
