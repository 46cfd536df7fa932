// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame numbers as they appear in sequence file names.
//!
//! A frame remembers the digit width it was written with so that `0001`
//! prints back as `0001` rather than `1`.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// A frame token that is not a plain non-negative integer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("frame number '{token}' is not a non-negative integer")]
pub struct FrameParseError {
    pub token: String,
}

/// A single frame number parsed from a file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Numeric frame index
    pub value: u64,

    /// Number of digits the frame was written with (0 = unpadded)
    pub width: usize,
}

impl Frame {
    /// Create a frame with an explicit zero-padded width.
    pub fn new(value: u64, width: usize) -> Self {
        Self { value, width }
    }

    /// Parse a frame token such as `"1003"` or `"0001"`.
    ///
    /// Only plain ASCII digits are accepted. Signs, whitespace and values
    /// that overflow `u64` are rejected.
    pub fn parse(digits: &str) -> Result<Self, FrameParseError> {
        let invalid = || FrameParseError {
            token: digits.to_string(),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let value = digits.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self::new(value, digits.len()))
    }

    /// Whether `self` directly follows `prev` (differs by exactly one).
    pub fn follows(&self, prev: &Frame) -> bool {
        prev.value.checked_add(1) == Some(self.value)
    }
}

impl From<u64> for Frame {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl Ord for Frame {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.width.cmp(&other.width))
    }
}

impl PartialOrd for Frame {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width)
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
