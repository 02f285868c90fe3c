//! Consumer encoding of built ranges
//!
//! Font loaders index glyphs with either 16-bit or 32-bit values and take
//! ranges as a flat `lo, hi, lo, hi, ..., 0` table. This module fits
//! [`GlyphRanges`] to a glyph width and produces that table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CodePoint, CodePointRange, GlyphRanges, MAX_CODE_POINT};

/// Bit width of the consumer's glyph index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphWidth {
    U16,
    U32,
}

impl Default for GlyphWidth {
    /// `U32` when built with the `wchar32` feature, `U16` otherwise
    fn default() -> Self {
        if cfg!(feature = "wchar32") {
            GlyphWidth::U32
        } else {
            GlyphWidth::U16
        }
    }
}

impl GlyphWidth {
    /// Highest code point the consumer can index
    pub fn max_code_point(self) -> CodePoint {
        match self {
            GlyphWidth::U16 => 0xFFFF,
            GlyphWidth::U32 => MAX_CODE_POINT,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            GlyphWidth::U16 => 16,
            GlyphWidth::U32 => 32,
        }
    }
}

impl fmt::Display for GlyphWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl FromStr for GlyphWidth {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "16" | "u16" => Ok(GlyphWidth::U16),
            "32" | "u32" => Ok(GlyphWidth::U32),
            _ => Err(EncodeError::UnknownWidth(s.to_string())),
        }
    }
}

/// What to do with code points the consumer's glyph width cannot hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Clip ranges to the width's maximum and drop the rest
    #[default]
    Drop,
    /// Fail on the first unrepresentable code point
    Reject,
}

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("code point U+{0:04X} does not fit the consumer's glyph width")]
    Unrepresentable(CodePoint),
    #[error("unknown glyph width '{0}' (expected 16 or 32)")]
    UnknownWidth(String),
}

impl GlyphRanges {
    /// Restrict the ranges to what a consumer of `width` can index
    pub fn fit(&self, width: GlyphWidth, policy: OverflowPolicy) -> Result<GlyphRanges, EncodeError> {
        let max = width.max_code_point();
        let mut fitted = Vec::with_capacity(self.len());
        for range in self {
            if range.hi() <= max {
                fitted.push(*range);
                continue;
            }
            let first_over = range.lo().max(max + 1);
            if policy == OverflowPolicy::Reject {
                return Err(EncodeError::Unrepresentable(first_over));
            }
            tracing::debug!(%range, %width, "dropping code points above glyph width");
            if range.lo() <= max {
                fitted.push(CodePointRange::literal(range.lo(), max));
            }
        }
        Ok(GlyphRanges::from_sorted(fitted))
    }

    /// Flat `lo, hi, ..., 0` table for a consumer of `width`.
    ///
    /// U+0000 is never emitted since 0 terminates the table.
    pub fn to_terminated(&self, width: GlyphWidth, policy: OverflowPolicy) -> Result<Vec<u32>, EncodeError> {
        let fitted = self.fit(width, policy)?;
        let mut table = Vec::with_capacity(fitted.len() * 2 + 1);
        for range in &fitted {
            let lo = range.lo().max(1);
            if lo > range.hi() {
                continue;
            }
            table.push(lo);
            table.push(range.hi());
        }
        table.push(0);
        Ok(table)
    }

    /// Flat table for a 16-bit consumer
    pub fn to_terminated_u16(&self, policy: OverflowPolicy) -> Result<Vec<u16>, EncodeError> {
        let table = self.to_terminated(GlyphWidth::U16, policy)?;
        // fit() has already bounded every value to 0xFFFF
        Ok(table.into_iter().map(|cp| cp as u16).collect())
    }
}
