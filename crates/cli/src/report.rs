// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-sequence report lines.

use std::fmt;

use crate::range::collapse;
use crate::sequence::SequenceMap;

/// One printed line: a sequence identifier and its range tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceLine {
    pub id: String,
    pub tokens: Vec<String>,
}

impl fmt::Display for SequenceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.tokens.join(", "))
    }
}

/// Collapse every sequence into its formatted range tokens.
///
/// Lines come out in identifier order.
pub fn format_sequences(sequences: &SequenceMap) -> Vec<SequenceLine> {
    sequences
        .iter()
        .map(|(id, frames)| SequenceLine {
            id: id.clone(),
            tokens: collapse(frames).iter().map(ToString::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
