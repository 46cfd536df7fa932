// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collapsing sorted frame lists into contiguous ranges.
//!
//! `[1, 2, 3, 5, 8, 9]` collapses to `1-3, 5, 8-9`: every maximal run of
//! consecutive numbers becomes one token, a run of one becomes a single.

use std::fmt;
use std::ops::RangeInclusive;

use crate::frame::Frame;

/// One maximal run of consecutive frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeToken {
    /// A frame with no neighbours in the set
    Single(Frame),

    /// Two or more consecutive frames, `end.value > start.value`
    Span { start: Frame, end: Frame },
}

impl RangeToken {
    fn from_run(start: Frame, end: Frame) -> Self {
        if start.value == end.value {
            Self::Single(start)
        } else {
            Self::Span { start, end }
        }
    }

    /// First frame of the run.
    pub fn start(&self) -> Frame {
        match *self {
            Self::Single(frame) => frame,
            Self::Span { start, .. } => start,
        }
    }

    /// Last frame of the run.
    pub fn end(&self) -> Frame {
        match *self {
            Self::Single(frame) => frame,
            Self::Span { end, .. } => end,
        }
    }

    /// Frame numbers covered by this token.
    pub fn values(&self) -> RangeInclusive<u64> {
        self.start().value..=self.end().value
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(frame) => write!(f, "{}", frame),
            Self::Span { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

/// Collapse ascending frames into maximal runs.
///
/// The input must be sorted ascending. A frame equal to its predecessor is
/// absorbed into the current run, so duplicates never yield overlapping
/// tokens. Runs in the output are in ascending order.
pub fn collapse(sorted_frames: &[Frame]) -> Vec<RangeToken> {
    debug_assert!(
        sorted_frames.windows(2).all(|w| w[0].value <= w[1].value),
        "collapse expects frames sorted ascending"
    );

    let mut tokens = Vec::new();
    let mut frames = sorted_frames.iter().copied();

    let Some(first) = frames.next() else {
        return tokens;
    };

    let mut run_start = first;
    let mut prev = first;

    for frame in frames {
        if frame.value == prev.value {
            continue;
        }
        if !frame.follows(&prev) {
            tokens.push(RangeToken::from_run(run_start, prev));
            run_start = frame;
        }
        prev = frame;
    }

    tokens.push(RangeToken::from_run(run_start, prev));
    tokens
}

/// Render tokens the way they are printed on a sequence line.
pub fn join_tokens(tokens: &[RangeToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
