//! Glyph range builder benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glyph_ranges::{GlyphRangeBuilder, RangeTable};

fn bench_add_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder");

    // Mixed kana/kanji text with an occasional supplementary character
    let text = "亜哀挨愛曖悪握圧扱宛嵐安案暗以衣位囲医依 かなカナ 𠮟 ".repeat(500);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("add_text", |b| {
        b.iter(|| {
            let mut builder = GlyphRangeBuilder::new();
            builder.add_text(black_box(text.as_bytes()));
            black_box(builder)
        })
    });

    group.finish();
}

fn bench_build_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder");

    let mut builder = GlyphRangeBuilder::new();
    builder.add_table(RangeTable::ChineseFull);
    builder.add_table(RangeTable::Korean);
    builder.add_str("𠮟");

    group.bench_function("build_ranges", |b| {
        b.iter(|| black_box(builder.build_ranges()))
    });

    group.bench_function("add_table_japanese", |b| {
        b.iter(|| {
            let mut builder = GlyphRangeBuilder::new();
            builder.add_table(black_box(RangeTable::Japanese));
            black_box(builder)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_add_text, bench_build_ranges);
criterion_main!(benches);
