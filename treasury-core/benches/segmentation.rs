//! Segmentation benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use treasury_core::{extract_quotes, strip_noise, SourceFormat};

/// A long exposition-style document with some markup on every paragraph
fn exposition_document(chapters: usize) -> String {
    let paragraph = "Mortification is the **habitual weakening** of lust, and a constant \
                     fighting against it [1](#note). It is _the_ work of the Spirit.\n\n";
    (1..=chapters)
        .map(|n| format!("## Chapter {}: Heading {}\n\na. {}", n, n, paragraph.repeat(20)))
        .collect()
}

fn segmentation_benchmark(c: &mut Criterion) {
    let doc = exposition_document(40);

    c.bench_function("segment_exposition_40", |b| {
        b.iter(|| SourceFormat::Exposition.segment(std::hint::black_box(&doc)))
    });

    c.bench_function("strip_noise", |b| {
        b.iter(|| strip_noise(std::hint::black_box(&doc)))
    });

    c.bench_function("extract_quotes", |b| {
        b.iter(|| extract_quotes(std::hint::black_box(&doc)).count())
    });
}

criterion_group!(benches, segmentation_benchmark);
criterion_main!(benches);
