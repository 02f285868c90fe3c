//! Property tests for the glyph range builder
//!
//! These tests check the output invariants of `build_ranges` against a
//! straightforward `BTreeSet` model of the marked code points.

use std::collections::BTreeSet;

use glyph_ranges::ranges::{GlyphWidth, OverflowPolicy};
use glyph_ranges::{CodePoint, CodePointRange, GlyphRangeBuilder, GlyphRanges};
use proptest::prelude::*;

/// Ranges clustered in a small window so that overlaps and adjacency are common
fn small_range() -> impl Strategy<Value = CodePointRange> {
    (0u32..2048, 0u32..48).prop_map(|(lo, len)| CodePointRange::new(lo, lo + len).unwrap())
}

/// Ranges anywhere in the code space, including the supplementary planes
fn any_range() -> impl Strategy<Value = CodePointRange> {
    (0u32..=0x10FFFF, 0u32..512)
        .prop_map(|(lo, len)| CodePointRange::new(lo, (lo + len).min(0x10FFFF)).unwrap())
}

fn model(ranges: &[CodePointRange], text: &[u8]) -> BTreeSet<CodePoint> {
    let mut used: BTreeSet<CodePoint> = ranges.iter().flat_map(|r| r.lo()..=r.hi()).collect();
    let mut rest = text;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                used.extend(valid.chars().map(|c| c as CodePoint));
                return used;
            },
            Err(e) => {
                let (valid, tail) = rest.split_at(e.valid_up_to());
                let valid = std::str::from_utf8(valid).unwrap();
                used.extend(valid.chars().map(|c| c as CodePoint));
                rest = &tail[e.error_len().unwrap_or(tail.len())..];
            },
        }
    }
}

fn covered(ranges: &GlyphRanges) -> BTreeSet<CodePoint> {
    ranges.iter().flat_map(|r| r.lo()..=r.hi()).collect()
}

fn assert_canonical(ranges: &GlyphRanges) {
    for pair in ranges.as_slice().windows(2) {
        assert!(
            pair[0].hi() + 1 < pair[1].lo(),
            "ranges {} and {} should have been merged or reordered",
            pair[0],
            pair[1]
        );
    }
}

proptest! {
    #[test]
    fn prop_output_covers_exactly_marked_set(
        ranges in prop::collection::vec(small_range(), 0..24),
        text in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut builder = GlyphRangeBuilder::new();
        builder.add_ranges(&ranges);
        builder.add_text(&text);
        let built = builder.build_ranges();

        assert_canonical(&built);
        let expected = model(&ranges, &text);
        prop_assert_eq!(covered(&built), expected.clone());
        prop_assert_eq!(builder.len(), expected.len());
        prop_assert_eq!(built.glyph_count(), expected.len());
    }

    #[test]
    fn prop_sparse_ranges_are_canonical(ranges in prop::collection::vec(any_range(), 0..16)) {
        let mut builder = GlyphRangeBuilder::new();
        builder.add_ranges(&ranges);
        let built = builder.build_ranges();

        assert_canonical(&built);
        for range in &ranges {
            prop_assert!(built.contains(range.lo()));
            prop_assert!(built.contains(range.hi()));
        }
    }

    #[test]
    fn prop_add_ranges_is_idempotent(ranges in prop::collection::vec(small_range(), 0..16)) {
        let mut once = GlyphRangeBuilder::new();
        once.add_ranges(&ranges);

        let mut twice = GlyphRangeBuilder::new();
        twice.add_ranges(&ranges);
        twice.add_ranges(&ranges);

        prop_assert_eq!(once.build_ranges(), twice.build_ranges());
    }

    #[test]
    fn prop_order_independent(
        ranges in prop::collection::vec(small_range(), 0..16),
        text in "\\PC{0,24}",
    ) {
        let mut forward = GlyphRangeBuilder::new();
        forward.add_str(&text);
        forward.add_ranges(&ranges);

        let mut reversed = GlyphRangeBuilder::new();
        reversed.add_ranges(ranges.iter().rev());
        let mut chars: Vec<char> = text.chars().collect();
        chars.reverse();
        for c in chars {
            reversed.add_char(c);
        }

        prop_assert_eq!(forward.build_ranges(), reversed.build_ranges());
    }

    #[test]
    fn prop_valid_text_matches_std_decoding(text in "\\PC{0,64}") {
        let mut builder = GlyphRangeBuilder::new();
        prop_assert_eq!(builder.add_text(text.as_bytes()), 0);
        let expected: BTreeSet<CodePoint> = text.chars().map(|c| c as CodePoint).collect();
        prop_assert_eq!(covered(&builder.build_ranges()), expected);
    }

    #[test]
    fn prop_strict_text_is_all_or_nothing(text in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut builder = GlyphRangeBuilder::new();
        match builder.try_add_text(&text) {
            Ok(()) => prop_assert!(std::str::from_utf8(&text).is_ok()),
            Err(err) => {
                let valid_up_to = std::str::from_utf8(&text).unwrap_err().valid_up_to();
                prop_assert_eq!(err.offset, valid_up_to);
                prop_assert!(builder.is_empty());
            },
        }
    }

    #[test]
    fn prop_terminated_table_shape(
        ranges in prop::collection::vec(any_range(), 0..16),
    ) {
        let mut builder = GlyphRangeBuilder::new();
        builder.add_ranges(&ranges);
        let built = builder.build_ranges();

        for width in [GlyphWidth::U16, GlyphWidth::U32] {
            let table = built.to_terminated(width, OverflowPolicy::Drop).unwrap();
            prop_assert_eq!(table.last(), Some(&0));
            prop_assert_eq!(table.len() % 2, 1);
            let body = &table[..table.len() - 1];
            prop_assert!(body.iter().all(|&cp| cp != 0 && cp <= width.max_code_point()));
        }
    }
}

#[test]
fn test_basic_coalescing_examples() {
    let r = |lo, hi| CodePointRange::new(lo, hi).unwrap();

    let mut builder = GlyphRangeBuilder::new();
    builder.add_ranges(&[r(0x41, 0x43)]);
    assert_eq!(builder.build_ranges().as_slice(), &[r(0x41, 0x43)]);

    let mut builder = GlyphRangeBuilder::new();
    builder.add_ranges(&[r(0x41, 0x43), r(0x44, 0x46)]);
    assert_eq!(builder.build_ranges().as_slice(), &[r(0x41, 0x46)]);

    let mut builder = GlyphRangeBuilder::new();
    builder.add_ranges(&[r(0x41, 0x43), r(0x50, 0x52)]);
    assert_eq!(builder.build_ranges().as_slice(), &[r(0x41, 0x43), r(0x50, 0x52)]);

    let mut builder = GlyphRangeBuilder::new();
    builder.add_text(b"A");
    builder.add_ranges(&[r(0x41, 0x41)]);
    assert_eq!(builder.build_ranges().as_slice(), &[r(0x41, 0x41)]);

    let mut builder = GlyphRangeBuilder::new();
    builder.add_text(&[0xF0, 0xA0, 0xAE, 0x9F]);
    let built = builder.build_ranges();
    assert_eq!(built.as_slice(), &[r(0x20B9F, 0x20B9F)]);
    assert_eq!(built.to_terminated(GlyphWidth::U32, OverflowPolicy::Reject).unwrap(), vec![0x20B9F, 0x20B9F, 0]);
    assert_eq!(built.to_terminated_u16(OverflowPolicy::Drop).unwrap(), vec![0]);
}
