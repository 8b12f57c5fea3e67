//! Benchmarks for mkdeck writing and reading performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks build synthetic decks of various sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mkdeck::{add_slide, Compression, PptxWriter, Presentation, SlideContent, WriteOptions};

/// Creates a presentation with the given number of bullet slides.
fn create_test_deck(slide_count: usize) -> Presentation {
    let mut pres = Presentation::new();
    add_slide(
        &mut pres,
        "Benchmark Deck",
        &SlideContent::Subtitle("Generated\nfor benchmarking".to_string()),
    )
    .unwrap();

    for i in 1..slide_count {
        let bullets: Vec<String> = (0..5)
            .map(|j| format!("Point {} of slide {}: some <escaped> & quoted \"text\"", j, i))
            .collect();
        add_slide(
            &mut pres,
            &format!("Slide {}", i + 1),
            &SlideContent::Bullets(bullets),
        )
        .unwrap();
    }

    pres
}

/// Benchmark package writing at various deck sizes.
fn bench_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pptx_writing");

    for slide_count in [1, 10, 50, 200].iter() {
        let pres = create_test_deck(*slide_count);

        for (label, compression) in [("deflated", Compression::Deflated), ("stored", Compression::Stored)] {
            let writer = PptxWriter::new(WriteOptions::new().with_compression(compression));
            group.bench_with_input(BenchmarkId::new(label, slide_count), &pres, |b, pres| {
                b.iter(|| {
                    let _ = writer.to_bytes(black_box(pres));
                });
            });
        }
    }

    group.finish();
}

/// Benchmark reading packages back.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pptx_parsing");

    for slide_count in [1, 10, 50, 200].iter() {
        let data = create_test_deck(*slide_count).to_bytes().unwrap();
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("slides", slide_count), &data, |b, data| {
            b.iter(|| {
                let _ = Presentation::from_bytes(black_box(data.clone()));
            });
        });
    }

    group.finish();
}

/// Benchmark building the Student Assessment Tracker deck.
fn bench_deck_building(c: &mut Criterion) {
    c.bench_function("student_tracker_deck", |b| {
        b.iter(|| {
            let _ = mkdeck::deck::build_student_tracker();
        });
    });
}

criterion_group!(benches, bench_writing, bench_parsing, bench_deck_building);
criterion_main!(benches);
