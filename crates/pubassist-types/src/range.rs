//! Item-based `Range` / `Content-Range` header values.
//!
//! The API paginates by item index rather than by byte offset:
//! requests carry `Range: items=<start>-<end>` (inclusive) and responses
//! echo `Content-Range: <unit> <start>-<end>/<total>`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Range unit understood by the API.
pub const RANGE_UNIT: &str = "items";

/// Requested span of items, 0-based and inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRange {
    pub start: usize,
    pub end: usize,
}

impl ItemRange {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange(format!("{}-{}", start, end)));
        }
        Ok(Self { start, end })
    }

    /// Number of items covered by the range.
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }
}

impl fmt::Display for ItemRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}-{}", RANGE_UNIT, self.start, self.end)
    }
}

impl FromStr for ItemRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidRange(s.to_string());

        let (unit, span) = s.trim().split_once('=').ok_or_else(invalid)?;
        if unit != RANGE_UNIT {
            return Err(invalid());
        }
        let (start, end) = span.split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse::<usize>().map_err(|_| invalid())?;
        let end = end.trim().parse::<usize>().map_err(|_| invalid())?;

        ItemRange::new(start, end).map_err(|_| invalid())
    }
}

/// Span actually served by the API together with the total item count.
///
/// The backend reports `end` as its clamped exclusive bound plus one, so
/// `end` overshoots the last served index and lies before `start` when the
/// request was past the end of the list (`items 180-96/95`). Only `start`
/// and `total` are reliable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRange {
    pub unit: String,
    pub start: usize,
    pub end: usize,
    /// `None` when the server answered with `*`
    pub total: Option<usize>,
}

impl ContentRange {
    pub fn items(start: usize, end: usize, total: Option<usize>) -> Self {
        Self {
            unit: RANGE_UNIT.to_string(),
            start,
            end,
            total,
        }
    }
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total {
            Some(total) => write!(f, "{} {}-{}/{}", self.unit, self.start, self.end, total),
            None => write!(f, "{} {}-{}/*", self.unit, self.start, self.end),
        }
    }
}

impl FromStr for ContentRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidContentRange(s.to_string());

        let (unit, rest) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let (span, total) = rest.trim().split_once('/').ok_or_else(invalid)?;
        let (start, end) = span.split_once('-').ok_or_else(invalid)?;

        let start = start.trim().parse::<usize>().map_err(|_| invalid())?;
        let end = end.trim().parse::<usize>().map_err(|_| invalid())?;

        let total = match total.trim() {
            "*" => None,
            value => Some(value.parse::<usize>().map_err(|_| invalid())?),
        };

        Ok(Self {
            unit: unit.to_string(),
            start,
            end,
            total,
        })
    }
}
