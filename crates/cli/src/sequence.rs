// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grouping of file names into frame sequences.
//!
//! A sequence file name has the shape `<id>.<frame>[.<anything>]`, for
//! example `c.1003.jpg`. Names that do not fit are rejected individually and
//! never abort the batch.

use std::collections::btree_map;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::frame::{Frame, FrameParseError};

/// Per-file errors raised while reading sequence file names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("malformed sequence file name '{name}': expected <id>.<frame>")]
    MalformedFilename { name: String },

    #[error("bad frame in '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: FrameParseError,
    },
}

impl SequenceError {
    /// The file name the error was raised for.
    pub fn filename(&self) -> &str {
        match self {
            Self::MalformedFilename { name } | Self::Parse { name, .. } => name,
        }
    }
}

/// Split a file name into its sequence identifier and frame.
pub fn parse_filename(name: &str) -> Result<(String, Frame), SequenceError> {
    let malformed = || SequenceError::MalformedFilename {
        name: name.to_string(),
    };

    let mut parts = name.split('.');
    let id = parts.next().filter(|id| !id.is_empty()).ok_or_else(malformed)?;
    let digits = parts.next().ok_or_else(malformed)?;

    let frame = Frame::parse(digits).map_err(|source| SequenceError::Parse {
        name: name.to_string(),
        source,
    })?;
    Ok((id.to_string(), frame))
}

/// Sorted, deduplicated frames keyed by sequence identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceMap {
    sequences: BTreeMap<String, Vec<Frame>>,
}

impl SequenceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame for a sequence, creating the entry on first sight.
    ///
    /// Call [`SequenceMap::normalize`] once all frames are in.
    pub fn insert(&mut self, id: impl Into<String>, frame: Frame) {
        self.sequences.entry(id.into()).or_default().push(frame);
    }

    /// Sort every sequence ascending and drop repeated frame numbers.
    ///
    /// When the same number was written with several widths the narrowest
    /// spelling is kept.
    pub fn normalize(&mut self) {
        for frames in self.sequences.values_mut() {
            frames.sort();
            frames.dedup_by_key(|f| f.value);
        }
    }

    /// Frames for one sequence, if present.
    pub fn get(&self, id: &str) -> Option<&[Frame]> {
        self.sequences.get(id).map(Vec::as_slice)
    }

    /// Iterate sequences in identifier order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<Frame>> {
        self.sequences.iter()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl<'a> IntoIterator for &'a SequenceMap {
    type Item = (&'a String, &'a Vec<Frame>);
    type IntoIter = btree_map::Iter<'a, String, Vec<Frame>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of reading a batch of file names.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    /// Frames found per sequence, sorted and deduplicated
    pub sequences: SequenceMap,

    /// File names that could not be read, in input order
    pub rejected: Vec<SequenceError>,
}

/// Group file names by sequence identifier.
pub fn extract<I, S>(filenames: I) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extraction = Extraction::default();

    for name in filenames {
        match parse_filename(name.as_ref()) {
            Ok((id, frame)) => extraction.sequences.insert(id, frame),
            Err(e) => extraction.rejected.push(e),
        }
    }

    extraction.sequences.normalize();
    extraction
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
