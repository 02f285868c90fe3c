//! Glyph selection
//!
//! Runs a [`Config`] through the builder: tables, literal text and word
//! lists in, ranges fitted to the consumer's glyph width out.

use serde::Serialize;

use super::Config;
use crate::ranges::{GlyphRangeBuilder, GlyphRanges, GlyphWidth};
use crate::wordlist::WordList;
use crate::Result;

/// Ranges selected by a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphSelection {
    /// Ranges fitted to `width`
    pub ranges: GlyphRanges,
    /// Code points covered by `ranges`
    pub glyph_count: usize,
    /// Code points marked before fitting to `width`
    pub requested_count: usize,
    pub width: GlyphWidth,
    /// Malformed UTF-8 sequences skipped while reading text
    pub skipped: usize,
}

impl GlyphSelection {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = GlyphRangeBuilder::new();

        for table in &config.tables {
            builder.add_table(*table);
        }
        for text in &config.text {
            builder.add_str(text);
        }
        let mut skipped = 0;
        for path in &config.word_lists {
            let list = WordList::load(path)?;
            skipped += list.feed(&mut builder, config.utf8)?;
        }

        let requested = builder.build_ranges();
        let ranges = requested.fit(config.glyph_width, config.overflow)?;
        let selection = Self {
            glyph_count: ranges.glyph_count(),
            requested_count: requested.glyph_count(),
            ranges,
            width: config.glyph_width,
            skipped,
        };
        tracing::info!(
            ranges = selection.ranges.len(),
            glyphs = selection.glyph_count,
            dropped = selection.dropped_count(),
            width = %selection.width,
            "glyph selection ready"
        );
        Ok(selection)
    }

    /// Code points lost to the glyph width
    pub fn dropped_count(&self) -> usize {
        self.requested_count - self.glyph_count
    }
}
