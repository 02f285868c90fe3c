//! Code-point ranges
//!
//! Interval types, the range builder, predefined tables and the
//! consumer-facing encoding of built ranges.

mod builder;
mod encode;
mod tables;
pub mod utf8;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use builder::{GlyphRangeBuilder, TextError};
pub use encode::{EncodeError, GlyphWidth, OverflowPolicy};
pub use tables::{ParseTableError, RangeTable};

/// A Unicode scalar value (or, inside range tables, any value up to
/// [`MAX_CODE_POINT`]).
pub type CodePoint = u32;

/// Highest code point the builder can address.
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

/// Errors from constructing a [`CodePointRange`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("inverted range: U+{lo:04X} > U+{hi:04X}")]
    Inverted { lo: CodePoint, hi: CodePoint },
    #[error("code point U+{0:04X} is above U+10FFFF")]
    OutOfBounds(CodePoint),
}

/// A closed interval `[lo, hi]` of code points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[CodePoint; 2]", into = "[CodePoint; 2]")]
pub struct CodePointRange {
    lo: CodePoint,
    hi: CodePoint,
}

impl CodePointRange {
    /// Create a range, validating `lo <= hi <= U+10FFFF`
    pub fn new(lo: CodePoint, hi: CodePoint) -> Result<Self, RangeError> {
        if hi > MAX_CODE_POINT {
            return Err(RangeError::OutOfBounds(hi));
        }
        if lo > hi {
            return Err(RangeError::Inverted { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Range covering a single code point
    pub fn single(cp: char) -> Self {
        Self {
            lo: cp as CodePoint,
            hi: cp as CodePoint,
        }
    }

    /// Compile-time constructor for literal tables.
    ///
    /// Panics (at compile time when used in a `const`) on an invalid range.
    pub(crate) const fn literal(lo: CodePoint, hi: CodePoint) -> Self {
        assert!(lo <= hi && hi <= MAX_CODE_POINT);
        Self { lo, hi }
    }

    pub fn lo(&self) -> CodePoint {
        self.lo
    }

    pub fn hi(&self) -> CodePoint {
        self.hi
    }

    /// Number of code points covered
    pub fn len(&self) -> usize {
        (self.hi - self.lo) as usize + 1
    }

    /// Always false; a range covers at least one code point
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, cp: CodePoint) -> bool {
        self.lo <= cp && cp <= self.hi
    }
}

impl TryFrom<[CodePoint; 2]> for CodePointRange {
    type Error = RangeError;

    fn try_from([lo, hi]: [CodePoint; 2]) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl From<CodePointRange> for [CodePoint; 2] {
    fn from(range: CodePointRange) -> Self {
        [range.lo, range.hi]
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}-U+{:04X}", self.lo, self.hi)
    }
}

/// Ordered, coalesced output of [`GlyphRangeBuilder::build_ranges`].
///
/// Ranges are strictly increasing, disjoint and never adjacent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GlyphRanges {
    ranges: Vec<CodePointRange>,
}

impl GlyphRanges {
    /// Wrap ranges that are already ordered and coalesced
    pub(crate) fn from_sorted(ranges: Vec<CodePointRange>) -> Self {
        debug_assert!(ranges.windows(2).all(|w| w[0].hi + 1 < w[1].lo));
        Self { ranges }
    }

    pub fn as_slice(&self) -> &[CodePointRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodePointRange> {
        self.ranges.iter()
    }

    /// Number of ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of code points covered by all ranges
    pub fn glyph_count(&self) -> usize {
        self.ranges.iter().map(CodePointRange::len).sum()
    }

    pub fn contains(&self, cp: CodePoint) -> bool {
        self.ranges
            .binary_search_by(|r| {
                if r.hi < cp {
                    std::cmp::Ordering::Less
                } else if r.lo > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Highest covered code point, if any
    pub fn max_code_point(&self) -> Option<CodePoint> {
        self.ranges.last().map(|r| r.hi)
    }
}

impl<'a> IntoIterator for &'a GlyphRanges {
    type Item = &'a CodePointRange;
    type IntoIter = std::slice::Iter<'a, CodePointRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl IntoIterator for GlyphRanges {
    type Item = CodePointRange;
    type IntoIter = std::vec::IntoIter<CodePointRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}
