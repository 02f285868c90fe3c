//! Glyph range builder
//!
//! Accumulates used code points in a bitset and compiles them into the
//! smallest ordered list of disjoint, non-adjacent closed ranges.

use super::utf8::{self, Decoded};
use super::{CodePoint, CodePointRange, GlyphRanges, RangeTable, MAX_CODE_POINT};

const WORD_BITS: u32 = u64::BITS;

/// Malformed UTF-8 passed to [`GlyphRangeBuilder::try_add_text`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed UTF-8 sequence at byte offset {offset}")]
pub struct TextError {
    /// Byte offset of the first malformed sequence
    pub offset: usize,
}

/// Set of used code points, one bit each
///
/// The bitset grows lazily up to the word holding the highest marked code
/// point, so a Latin-only builder stays small while a builder holding
/// supplementary-plane text still fits in 136 KiB.
#[derive(Debug, Clone, Default)]
pub struct GlyphRangeBuilder {
    words: Vec<u64>,
}

impl GlyphRangeBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a single code point
    pub fn add_char(&mut self, c: char) {
        self.set(c as CodePoint);
    }

    /// Mark every code point of every range
    pub fn add_ranges<'a, I>(&mut self, ranges: I)
    where
        I: IntoIterator<Item = &'a CodePointRange>,
    {
        for range in ranges {
            self.set_range(range.lo(), range.hi());
        }
    }

    /// Mark every code point of a predefined table
    pub fn add_table(&mut self, table: RangeTable) {
        tracing::debug!(table = table.name(), "adding range table");
        self.add_ranges(table.ranges());
    }

    /// Mark every character of valid text
    pub fn add_str(&mut self, text: &str) {
        for c in text.chars() {
            self.add_char(c);
        }
    }

    /// Decode UTF-8 and mark every valid character.
    ///
    /// Malformed sequences are skipped; the return value is how many were
    /// skipped. A truncated sequence at the end counts as one.
    pub fn add_text(&mut self, text: &[u8]) -> usize {
        let mut skipped = 0;
        for item in utf8::decode(text) {
            match item {
                Decoded::Char(c) => self.add_char(c),
                Decoded::Invalid { offset } => {
                    tracing::trace!(offset, "skipping malformed UTF-8");
                    skipped += 1;
                },
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "skipped malformed UTF-8 sequences");
        }
        skipped
    }

    /// Decode UTF-8 and mark every character, or mark nothing at all if the
    /// text contains a malformed sequence.
    pub fn try_add_text(&mut self, text: &[u8]) -> Result<(), TextError> {
        if let Some(offset) = utf8::decode(text).find_map(|item| match item {
            Decoded::Invalid { offset } => Some(offset),
            Decoded::Char(_) => None,
        }) {
            return Err(TextError { offset });
        }
        self.add_text(text);
        Ok(())
    }

    /// Mark every code point marked in `other`
    pub fn union(&mut self, other: &GlyphRangeBuilder) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (word, &theirs) in self.words.iter_mut().zip(&other.words) {
            *word |= theirs;
        }
    }

    /// Whether a code point has been marked
    pub fn contains(&self, cp: CodePoint) -> bool {
        let (word, bit) = Self::locate(cp);
        self.words.get(word).is_some_and(|w| w & bit != 0)
    }

    /// Number of marked code points
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Unmark everything and release the bitset
    pub fn clear(&mut self) {
        self.words = Vec::new();
    }

    /// Compile the marked set into maximal runs, in increasing order.
    ///
    /// The builder is left untouched and may be queried again.
    pub fn build_ranges(&self) -> GlyphRanges {
        let mut ranges = Vec::new();
        let mut run_start: Option<CodePoint> = None;

        for (index, &word) in self.words.iter().enumerate() {
            let base = index as CodePoint * WORD_BITS;
            match (word, run_start) {
                // Whole word continues the current run, or has nothing to start one
                (u64::MAX, Some(_)) | (0, None) => continue,
                (0, Some(start)) => {
                    ranges.push(CodePointRange::literal(start, base - 1));
                    run_start = None;
                    continue;
                },
                _ => {},
            }
            for bit in 0..WORD_BITS {
                let used = word & (1u64 << bit) != 0;
                match (used, run_start) {
                    (true, None) => run_start = Some(base + bit),
                    (false, Some(start)) => {
                        ranges.push(CodePointRange::literal(start, base + bit - 1));
                        run_start = None;
                    },
                    _ => {},
                }
            }
        }
        if let Some(start) = run_start {
            let end = (self.words.len() as CodePoint * WORD_BITS - 1).min(MAX_CODE_POINT);
            ranges.push(CodePointRange::literal(start, end));
        }

        tracing::debug!(ranges = ranges.len(), "built glyph ranges");
        GlyphRanges::from_sorted(ranges)
    }

    fn locate(cp: CodePoint) -> (usize, u64) {
        ((cp / WORD_BITS) as usize, 1u64 << (cp % WORD_BITS))
    }

    fn ensure_word(&mut self, word: usize) {
        if self.words.len() <= word {
            self.words.resize(word + 1, 0);
        }
    }

    fn set(&mut self, cp: CodePoint) {
        let (word, bit) = Self::locate(cp);
        self.ensure_word(word);
        self.words[word] |= bit;
    }

    fn set_range(&mut self, lo: CodePoint, hi: CodePoint) {
        let (first, _) = Self::locate(lo);
        let (last, _) = Self::locate(hi);
        self.ensure_word(last);

        let lo_bit = lo % WORD_BITS;
        let hi_bit = hi % WORD_BITS;
        // Bits lo_bit..=63 and 0..=hi_bit respectively
        let head = u64::MAX << lo_bit;
        let tail = u64::MAX >> (WORD_BITS - 1 - hi_bit);

        if first == last {
            self.words[first] |= head & tail;
        } else {
            self.words[first] |= head;
            for word in &mut self.words[first + 1..last] {
                *word = u64::MAX;
            }
            self.words[last] |= tail;
        }
    }
}
